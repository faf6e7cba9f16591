//! Tile kinds and per-cell candidate sets.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tinyvec::ArrayVec;

/// A tile type a cell can resolve to.
///
/// The set of kinds is closed. Each kind has a one-character glyph used by the
/// text form of [`TileGrid`](crate::TileGrid) and a lowercase name used on the
/// command line and in serialized snapshots.
///
/// # Examples
///
/// ```
/// use islet_core::TileKind;
///
/// assert_eq!(TileKind::Water.glyph(), '~');
/// assert_eq!("land".parse::<TileKind>()?, TileKind::Land);
/// assert_eq!(TileKind::ALL.len(), TileKind::COUNT);
/// # Ok::<(), islet_core::TileKindParseError>(())
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    /// Open water.
    #[default]
    Water,
    /// Dry land; the only kind that accepts decorations.
    Land,
}

impl TileKind {
    /// Number of tile kinds.
    pub const COUNT: usize = 2;

    /// All tile kinds in declaration order.
    pub const ALL: [Self; Self::COUNT] = [Self::Water, Self::Land];

    /// Returns the character used for a resolved cell of this kind.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Water => '~',
            Self::Land => '.',
        }
    }

    /// Returns the character used for an undecided cell whose only candidate is this kind.
    #[must_use]
    pub const fn determined_glyph(self) -> char {
        match self {
            Self::Water => 'w',
            Self::Land => 'l',
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Land => "land",
        }
    }

    /// Returns the kind whose resolved glyph is `ch`.
    #[must_use]
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.glyph() == ch)
    }
}

impl Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a tile kind name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown tile kind: {name:?}")]
pub struct TileKindParseError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for TileKind {
    type Err = TileKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s) || s.chars().eq([kind.glyph()]))
            .ok_or_else(|| TileKindParseError { name: s.to_owned() })
    }
}

/// Ordered set of tile kinds a cell may still take.
///
/// Insertion order is kept: the collapse step picks by index, so two
/// candidate sets with the same members in a different order produce different
/// picks for the same random draw. Each kind appears at most once.
///
/// # Examples
///
/// ```
/// use islet_core::{TileCandidates, TileKind};
///
/// let candidates = TileCandidates::from_kinds([TileKind::Land, TileKind::Water]);
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates.get(0), Some(TileKind::Land));
///
/// let water_only = candidates.retain_in(&TileCandidates::single(TileKind::Water));
/// assert_eq!(water_only.as_single(), Some(TileKind::Water));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct TileCandidates {
    kinds: ArrayVec<[TileKind; TileKind::COUNT]>,
}

impl TileCandidates {
    /// An empty candidate set (a contradiction when found on a cell).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every tile kind, in declaration order.
    #[must_use]
    pub fn full() -> Self {
        Self::from_kinds(TileKind::ALL)
    }

    /// A set containing exactly `kind`.
    #[must_use]
    pub fn single(kind: TileKind) -> Self {
        let mut kinds = ArrayVec::new();
        kinds.push(kind);
        Self { kinds }
    }

    /// Builds a set from kinds in order.
    ///
    /// # Panics
    ///
    /// Panics if a kind is repeated.
    #[must_use]
    pub fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = TileKind>,
    {
        let mut set = Self::empty();
        for kind in kinds {
            assert!(!set.contains(kind), "duplicate tile kind: {kind}");
            set.kinds.push(kind);
        }
        set
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if no candidate remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Returns `true` if `kind` is a candidate.
    #[must_use]
    pub fn contains(&self, kind: TileKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Returns the candidate at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<TileKind> {
        self.kinds.get(index).copied()
    }

    /// Returns the only candidate, if exactly one remains.
    #[must_use]
    pub fn as_single(&self) -> Option<TileKind> {
        match self.kinds.as_slice() {
            [kind] => Some(*kind),
            _ => None,
        }
    }

    /// Iterates over the candidates in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = TileKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Returns the candidates of `self` that are also in `other`, keeping the order of `self`.
    #[must_use]
    pub fn retain_in(&self, other: &Self) -> Self {
        self.filter(|kind| other.contains(kind))
    }

    /// Returns the candidates of `self` accepted by `keep`, keeping their order.
    #[must_use]
    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(TileKind) -> bool,
    {
        Self {
            kinds: self.kinds.iter().copied().filter(|kind| keep(*kind)).collect(),
        }
    }
}

impl FromIterator<TileKind> for TileCandidates {
    fn from_iter<T: IntoIterator<Item = TileKind>>(iter: T) -> Self {
        Self::from_kinds(iter)
    }
}

impl<'a> IntoIterator for &'a TileCandidates {
    type Item = TileKind;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, TileKind>>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinds.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_glyphs() {
        assert_eq!("water".parse::<TileKind>(), Ok(TileKind::Water));
        assert_eq!("LAND".parse::<TileKind>(), Ok(TileKind::Land));
        assert_eq!("~".parse::<TileKind>(), Ok(TileKind::Water));
        assert_eq!(".".parse::<TileKind>(), Ok(TileKind::Land));
        assert!("lava".parse::<TileKind>().is_err());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(TileKind::Water.to_string(), "water");
        assert_eq!(TileKind::Land.to_string(), "land");
    }

    #[test]
    fn test_from_glyph() {
        assert_eq!(TileKind::from_glyph('~'), Some(TileKind::Water));
        assert_eq!(TileKind::from_glyph('.'), Some(TileKind::Land));
        assert_eq!(TileKind::from_glyph('w'), None);
    }

    #[test]
    fn test_candidates_keep_insertion_order() {
        let candidates = TileCandidates::from_kinds([TileKind::Land, TileKind::Water]);
        assert_eq!(
            candidates.iter().collect::<Vec<_>>(),
            [TileKind::Land, TileKind::Water]
        );
        let filtered = candidates.filter(|kind| kind == TileKind::Water);
        assert_eq!(filtered, TileCandidates::single(TileKind::Water));
    }

    #[test]
    fn test_retain_in_can_empty_the_set() {
        let land = TileCandidates::single(TileKind::Land);
        let water = TileCandidates::single(TileKind::Water);
        assert!(land.retain_in(&water).is_empty());
        assert_eq!(land.retain_in(&TileCandidates::full()), land);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(TileCandidates::full().as_single(), None);
        assert_eq!(TileCandidates::empty().as_single(), None);
        assert_eq!(
            TileCandidates::single(TileKind::Land).as_single(),
            Some(TileKind::Land)
        );
    }

    #[test]
    #[should_panic(expected = "duplicate tile kind: water")]
    fn test_duplicate_kind_panics() {
        let _ = TileCandidates::from_kinds([TileKind::Water, TileKind::Water]);
    }
}
