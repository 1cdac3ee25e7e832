use std::fmt;
use tracing::warn;

/// A byte offset. Keep this small (currently 32-bits), as every token and node
/// stores two of them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct BytePos(pub u32);

impl BytePos {
    #[inline(always)]
    pub fn to_u32(self) -> u32 {
        self.0
    }
}

/// A single point in the source text.
///
/// Lines are 1-based, columns are 0-based and counted in characters from the
/// start of the line, `offset` is the absolute byte offset from the start of
/// the input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: BytePos,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Position {
            line,
            column,
            offset: BytePos(offset),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The span of source text a token or node corresponds to.
///
/// Both ends start out unset and are filled in by whoever produces the owning
/// value, usually the start when it begins scanning or parsing the construct
/// and the end once it is complete. Either end may be written again later; the
/// last write wins.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SourceLocation {
    start: Option<Position>,
    end: Option<Position>,
}

impl SourceLocation {
    /// Creates a location with both ends set.
    pub fn new(start: Position, end: Position) -> Self {
        let mut loc = SourceLocation::default();
        loc.set_start(start);
        loc.set_end(end);
        loc
    }

    #[inline]
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn set_start(&mut self, start: Position) {
        self.start = Some(start);
        self.check_order();
    }

    pub fn set_end(&mut self, end: Position) {
        self.end = Some(end);
        self.check_order();
    }

    /// Returns `true` once both ends have been set.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns `false` only if both ends are set and the end lies before the
    /// start.
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start.offset <= end.offset,
            _ => true,
        }
    }

    // Out-of-order writes are kept; a later write may still correct them.
    fn check_order(&self) {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end.offset < start.offset {
                warn!(
                    start = start.offset.0,
                    end = end.offset.0,
                    "source location ends before it starts"
                );
            }
        }
    }
}

/// Anything that owns a [`SourceLocation`].
///
/// # Derive
/// This trait can be derived with `#[derive(Located)]` from the `ast_node`
/// crate.
pub trait Located {
    fn loc(&self) -> &SourceLocation;

    fn loc_mut(&mut self) -> &mut SourceLocation;

    /// Sets the start of the location and returns `self` for chaining.
    fn set_start_position(&mut self, position: Position) -> &mut Self
    where
        Self: Sized,
    {
        self.loc_mut().set_start(position);
        self
    }

    /// Sets the end of the location and returns `self` for chaining.
    fn set_end_position(&mut self, position: Position) -> &mut Self
    where
        Self: Sized,
    {
        self.loc_mut().set_end(position);
        self
    }
}

impl Located for SourceLocation {
    #[inline(always)]
    fn loc(&self) -> &SourceLocation {
        self
    }

    #[inline(always)]
    fn loc_mut(&mut self) -> &mut SourceLocation {
        self
    }
}

impl<L> Located for Box<L>
where
    L: ?Sized + Located,
{
    fn loc(&self) -> &SourceLocation {
        <L as Located>::loc(self)
    }

    fn loc_mut(&mut self) -> &mut SourceLocation {
        <L as Located>::loc_mut(self)
    }
}
