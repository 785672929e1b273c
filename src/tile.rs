//! Semantic tags for calendar tiles.
//!
//! Classification is a pure function of the tile, the committed value, the
//! hover instant and "now". The tags come back in a fixed order: current
//! period, activity, range edges, hover edges.

use crate::dates;
use crate::format::{FormatStyle, FormatterCache};
use crate::granularity::Granularity;
use crate::prelude::*;
use crate::range::Period;
use crate::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TileTag {
    /// The tile's period contains "now"
    #[display(fmt = "now")]
    Now,
    /// The value covers the whole tile
    #[display(fmt = "active")]
    Active,
    /// An end of the value falls inside the tile
    #[display(fmt = "hasActive")]
    HasActive,
    #[display(fmt = "range")]
    Range,
    #[display(fmt = "rangeStart")]
    RangeStart,
    #[display(fmt = "rangeEnd")]
    RangeEnd,
    #[display(fmt = "rangeBothEnds")]
    RangeBothEnds,
    #[display(fmt = "hover")]
    Hover,
    #[display(fmt = "hoverStart")]
    HoverStart,
    #[display(fmt = "hoverEnd")]
    HoverEnd,
    #[display(fmt = "hoverBothEnds")]
    HoverBothEnds,
}

/// Ordered, immutable tag list for one tile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref)]
pub struct TileTags(Vec<TileTag>);

impl TileTags {
    pub fn has(&self, tag: TileTag) -> bool {
        self.0.contains(&tag)
    }

    /// Space separated tag names, e.g. `"now active range"`.
    pub fn class_names(&self) -> String {
        self.0.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
    }
}

impl FromIterator<TileTag> for TileTags {
    fn from_iter<I: IntoIterator<Item = TileTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

struct EdgeTags {
    base:      TileTag,
    start:     TileTag,
    end:       TileTag,
    both_ends: TileTag,
}

const RANGE_TAGS: EdgeTags = EdgeTags {
    base:      TileTag::Range,
    start:     TileTag::RangeStart,
    end:       TileTag::RangeEnd,
    both_ends: TileTag::RangeBothEnds,
};

const HOVER_TAGS: EdgeTags = EdgeTags {
    base:      TileTag::Hover,
    start:     TileTag::HoverStart,
    end:       TileTag::HoverEnd,
    both_ends: TileTag::HoverBothEnds,
};

/// Tags for the tile at `date` of `granularity`.
///
/// A single value is widened to its period at `value_type`; a complete pair
/// is used as given, so a pair stored latest-first matches no tile. Hover tags
/// only appear while a range selection is in progress, over the span between
/// the picked instant and `hover` in chronological order.
pub fn classify(
    date: NaiveDateTime,
    granularity: Granularity,
    value: Option<&Value>,
    value_type: Granularity,
    hover: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> TileTags {
    let tile = Period::of(granularity, date);
    let now_tag = tile.contains_instant(now).then_some(TileTag::Now);

    let Some(selected) = value.and_then(|v| value_period(v, value_type)) else {
        return now_tag.into_iter().collect();
    };

    let activity = if selected.contains(&tile) {
        Some(TileTag::Active)
    } else if selected.touches(&tile) {
        Some(TileTag::HasActive)
    } else {
        None
    };

    let hover_tags = match (value, hover) {
        (Some(Value::Single(_)), Some(hover)) => {
            edge_tags(&Period::spanning(selected.start(), hover), &tile, &HOVER_TAGS)
        },
        _ => Vec::new(),
    };

    now_tag
        .into_iter()
        .chain(activity)
        .chain(edge_tags(&selected, &tile, &RANGE_TAGS))
        .chain(hover_tags)
        .collect()
}

fn value_period(value: &Value, value_type: Granularity) -> Option<Period> {
    match *value {
        Value::Single(instant) => Some(Period::of(value_type, instant)),
        Value::Range(Some(from), Some(to)) => Some(Period::as_given(from, to)),
        Value::Range(..) => None,
    }
}

fn edge_tags(range: &Period, tile: &Period, tags: &EdgeTags) -> Vec<TileTag> {
    if !tile.touches(range) {
        return Vec::new();
    }
    let is_start = tile.contains_instant(range.start());
    let is_end = tile.contains_instant(range.end());

    [
        Some(tags.base),
        is_start.then_some(tags.start),
        is_end.then_some(tags.end),
        (is_start && is_end).then_some(tags.both_ends),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Tile shape per view: years in the decade view, months in the year view and
/// days in the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TileKind {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl TileKind {
    pub const fn from_view(view: Granularity) -> Self {
        match view {
            Granularity::Decade => Self::Year,
            Granularity::Year => Self::Month,
            Granularity::Month | Granularity::Day => Self::Day,
        }
    }

    pub const fn granularity(self) -> Granularity {
        match self {
            Self::Year => Granularity::Year,
            Self::Month => Granularity::Month,
            Self::Day => Granularity::Day,
        }
    }

    /// The view whose grid holds tiles of this kind.
    pub const fn view(self) -> Granularity {
        match self {
            Self::Year => Granularity::Decade,
            Self::Month => Granularity::Year,
            Self::Day => Granularity::Month,
        }
    }

    pub fn period_bounds(self, date: NaiveDateTime) -> Period {
        Period::of(self.granularity(), date)
    }

    /// Short text shown on the tile.
    pub fn label(self, formatter: &mut FormatterCache, locale: Option<&str>, date: NaiveDateTime) -> String {
        let style = match self {
            Self::Year => FormatStyle::Year,
            Self::Month => FormatStyle::Month,
            Self::Day => FormatStyle::Day,
        };
        formatter.format(style, locale, date)
    }

    /// Unambiguous text for the tile, used as its accessible name.
    pub fn title(self, formatter: &mut FormatterCache, locale: Option<&str>, date: NaiveDateTime) -> String {
        let style = match self {
            Self::Year => FormatStyle::Year,
            Self::Month => FormatStyle::MonthYear,
            Self::Day => FormatStyle::LongDate,
        };
        formatter.format(style, locale, date)
    }

    pub fn classify(
        self,
        date: NaiveDateTime,
        value: Option<&Value>,
        value_type: Granularity,
        hover: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> TileTags {
        classify(date, self.granularity(), value, value_type, hover, now)
    }

    /// Whether the tile lies outside `[min_date, max_date]` once the bounds are
    /// widened to whole tiles.
    pub fn is_disabled(
        self,
        date: NaiveDateTime,
        min_date: Option<NaiveDateTime>,
        max_date: Option<NaiveDateTime>,
    ) -> bool {
        let granularity = self.granularity();
        min_date.is_some_and(|min| dates::begin(granularity, min) > date)
            || max_date.is_some_and(|max| dates::end(granularity, max) < date)
    }
}
