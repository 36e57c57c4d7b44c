//! Narrating every square of a FEN position.

use std::collections::{HashMap, VecDeque};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{Error, Result};
use crate::lang::names::{NameTable, EMPTY_SYMBOL};
use crate::moves::{PieceKind, Side, Square};

/// Positions the narration cache keeps before dropping old entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// A piece standing on a narrated board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPiece {
    pub side: Side,
    pub kind: PieceKind,
    /// FEN symbol, upper case for White.
    pub symbol: char,
    /// Spoken name, "White Queen's Knight" on b1.
    pub name: String,
}

/// ## Board Narration
///
/// The spoken description of one position: all 64 squares in rank-major
/// order from a1 to h8, each either empty or holding a named piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardNarration {
    squares: Vec<Option<NamedPiece>>,
}

impl BoardNarration {
    /// The piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&NamedPiece> {
        self.squares[square.index()].as_ref()
    }

    /// Spoken name of the occupant of `square`, or "." for an empty square.
    pub fn name_at(&self, square: Square) -> &str {
        match self.piece_at(square) {
            Some(piece) => &piece.name,
            None => ".",
        }
    }

    /// FEN symbol on `square`, or '.' for an empty square.
    pub fn symbol_at(&self, square: Square) -> char {
        match self.piece_at(square) {
            Some(piece) => piece.symbol,
            None => EMPTY_SYMBOL,
        }
    }

    /// All 64 symbols in rank-major order, as a single string.
    pub fn symbols(&self) -> String {
        Square::all().map(|square| self.symbol_at(square)).collect()
    }

    /// All 64 spoken names in rank-major order.
    pub fn names(&self) -> Vec<&str> {
        Square::all().map(|square| self.name_at(square)).collect()
    }

    /// Iterates the squares and their occupants in rank-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<&NamedPiece>)> {
        Square::all().map(move |square| (square, self.piece_at(square)))
    }
}

struct CacheInner {
    entries: HashMap<String, Arc<BoardNarration>>,
    order: VecDeque<String>,
}

/// Oldest-first cache of narrated positions, keyed by the exact FEN string.
struct NarrationCache {
    capacity: usize,
    inner: RwLock<CacheInner>,
}

impl NarrationCache {
    fn new(capacity: usize) -> NarrationCache {
        NarrationCache {
            capacity,
            inner: RwLock::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    fn get(&self, fen: &str) -> Option<Arc<BoardNarration>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.entries.get(fen).cloned()
    }

    fn insert(&self, fen: String, narration: Arc<BoardNarration>) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.entries.insert(fen.clone(), narration).is_none() {
            inner.order.push_back(fen);
        }
        while inner.entries.len() > self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => inner.entries.remove(&oldest),
                None => break,
            };
        }
    }

    fn len(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.entries.len()
    }
}

impl std::fmt::Debug for NarrationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("NarrationCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

/// ## Board Narrator
///
/// Turns a FEN position into the spoken name of every square. Narrations
/// are cached by their FEN string, so repeated requests for the same
/// position reuse one shared [`BoardNarration`]. Narration itself is
/// deterministic; the cache only saves work.
#[derive(Debug)]
pub struct BoardNarrator {
    names: NameTable,
    cache: NarrationCache,
}

impl BoardNarrator {
    /// Creates a narrator over `names` with the default cache size.
    pub fn new(names: NameTable) -> BoardNarrator {
        BoardNarrator {
            names,
            cache: NarrationCache::new(DEFAULT_CACHE_CAPACITY),
        }
    }

    /// Replaces the cache with one holding at most `capacity` positions.
    /// A capacity of zero disables caching.
    pub fn with_cache_capacity(mut self, capacity: usize) -> BoardNarrator {
        self.cache = NarrationCache::new(capacity);
        self
    }

    /// Name table the narrator draws from.
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Number of positions currently cached.
    pub fn cached_positions(&self) -> usize {
        self.cache.len()
    }

    /// Narrates `fen`, reusing the cached narration when one exists.
    pub fn narrate(&self, fen: &str) -> Result<Arc<BoardNarration>> {
        if let Some(cached) = self.cache.get(fen) {
            return Ok(cached);
        }
        let narration = Arc::new(self.narrate_uncached(fen)?);
        self.cache.insert(fen.to_string(), Arc::clone(&narration));
        Ok(narration)
    }

    /// Narrates `fen` without touching the cache.
    pub fn narrate_uncached(&self, fen: &str) -> Result<BoardNarration> {
        let board =
            chess::Board::from_str(fen).map_err(|err| Error::InvalidPosition(err.to_string()))?;
        let mut squares = Vec::with_capacity(Square::COUNT);
        for square in Square::all() {
            let occupant = board
                .piece_on(square.into())
                .zip(board.color_on(square.into()));
            let named = match occupant {
                Some((piece, color)) => {
                    let side = Side::from(color);
                    let kind = PieceKind::from(piece);
                    Some(NamedPiece {
                        side,
                        kind,
                        symbol: kind.symbol(side),
                        name: self.names.descriptive_name(side, kind, square)?,
                    })
                }
                None => None,
            };
            squares.push(named);
        }
        Ok(BoardNarration { squares })
    }
}
