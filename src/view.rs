//! Resolution of the displayed view from the configured detail bounds.

use crate::granularity::{ALL_VIEWS, Granularity};

/// Views reachable between `min` and `max` (inclusive), coarsest first.
///
/// Returns an empty list when `min` is finer than `max`, or when either bound
/// is not a view.
pub fn limited_views(min: Granularity, max: Granularity) -> Vec<Granularity> {
    let (Some(from), Some(to)) = (view_index(min), view_index(max)) else {
        return Vec::new();
    };
    if from > to {
        return Vec::new();
    }
    ALL_VIEWS[from..=to].to_vec()
}

pub fn is_view_allowed(view: Granularity, min: Granularity, max: Granularity) -> bool {
    limited_views(min, max).contains(&view)
}

/// The view actually displayed.
///
/// A missing or out-of-range request silently falls back to `max`, the most
/// detailed allowed view.
pub fn effective_view(requested: Option<Granularity>, min: Granularity, max: Granularity) -> Granularity {
    match requested {
        Some(view) if is_view_allowed(view, min, max) => view,
        _ => max,
    }
}

/// Granularity of committed values for a given finest view.
pub const fn value_type(max: Granularity) -> Granularity {
    max.value_type()
}

/// The view one level finer than `view` within `views`, if drilling down is possible.
pub fn next_finer_view(views: &[Granularity], view: Granularity) -> Option<Granularity> {
    let index = views.iter().position(|v| *v == view)?;
    views.get(index + 1).copied()
}

/// The view one level coarser than `view` within `views`, if drilling up is possible.
pub fn next_coarser_view(views: &[Granularity], view: Granularity) -> Option<Granularity> {
    let index = views.iter().position(|v| *v == view)?;
    index.checked_sub(1).and_then(|i| views.get(i)).copied()
}

fn view_index(granularity: Granularity) -> Option<usize> {
    ALL_VIEWS.iter().position(|v| *v == granularity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Granularity::{Day, Decade, Month, Year};

    #[test]
    fn test_limited_views_cases() {
        struct TestCase {
            min:      Granularity,
            max:      Granularity,
            expected: Vec<Granularity>,
        }

        let cases = [
            TestCase {
                min:      Decade,
                max:      Month,
                expected: vec![Decade, Year, Month],
            },
            TestCase {
                min:      Year,
                max:      Month,
                expected: vec![Year, Month],
            },
            TestCase {
                min:      Decade,
                max:      Year,
                expected: vec![Decade, Year],
            },
            TestCase {
                min:      Month,
                max:      Month,
                expected: vec![Month],
            },
            TestCase {
                min:      Month,
                max:      Decade,
                expected: vec![],
            },
            TestCase {
                min:      Decade,
                max:      Day,
                expected: vec![],
            },
        ];

        for case in &cases {
            assert_eq!(
                limited_views(case.min, case.max),
                case.expected,
                "limited_views({}, {})",
                case.min,
                case.max
            );
        }
    }

    #[test]
    fn test_effective_view_defaults_to_max() {
        assert_eq!(effective_view(None, Decade, Month), Month);
        assert_eq!(effective_view(None, Decade, Year), Year);
    }

    #[test]
    fn test_effective_view_keeps_allowed_request() {
        assert_eq!(effective_view(Some(Decade), Decade, Month), Decade);
        assert_eq!(effective_view(Some(Year), Decade, Month), Year);
    }

    #[test]
    fn test_effective_view_downgrades_out_of_range_request() {
        assert_eq!(effective_view(Some(Decade), Year, Month), Month);
        assert_eq!(effective_view(Some(Month), Decade, Year), Year);
        assert_eq!(effective_view(Some(Day), Decade, Month), Month);
    }

    #[test]
    fn test_value_type_follows_max_detail() {
        assert_eq!(value_type(Month), Day);
        assert_eq!(value_type(Year), Month);
        assert_eq!(value_type(Decade), Year);
    }

    #[test]
    fn test_drill_neighbors() {
        let views = limited_views(Decade, Month);
        assert_eq!(next_finer_view(&views, Decade), Some(Year));
        assert_eq!(next_finer_view(&views, Month), None);
        assert_eq!(next_coarser_view(&views, Month), Some(Year));
        assert_eq!(next_coarser_view(&views, Decade), None);

        let narrow = limited_views(Year, Month);
        assert_eq!(next_coarser_view(&narrow, Year), None);
        assert_eq!(next_finer_view(&narrow, Decade), None);
    }
}
