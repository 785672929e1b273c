use crate::types::CalendarType;

/// Number of years grouped into one decade tile page
pub const DECADE_SPAN: i32 = 10;

/// Year tiles rendered when neighboring decade years are shown
pub const DECADE_TILES_WITH_NEIGHBORS: i32 = 12;

/// Month tiles in a year view
pub const MONTHS_IN_YEAR: u32 = 12;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;

pub const DAYS_IN_WEEK: u32 = 7;

/// Rows in a month grid when a fixed number of weeks is requested
pub const FIXED_WEEK_ROWS: u32 = 6;

/// Separator between the two years of a decade label
pub const DECADE_LABEL_SEPARATOR: &str = " – ";

/// Earliest year accepted for navigation targets
pub const MIN_NAVIGABLE_YEAR: i32 = 0;

/// Locale used when neither the caller nor the configuration names one
pub const DEFAULT_LOCALE: &str = "en-US";

/// Locales whose week layout follows a non-ISO calendar type.
/// Locales missing from every list fall back to ISO 8601.
pub const CALENDAR_TYPE_LOCALES: &[(CalendarType, &[&str])] = &[
    (
        CalendarType::Gregory,
        &[
            "en-CA", "en-US", "es-AR", "es-BO", "es-CL", "es-CO", "es-CR", "es-DO", "es-EC", "es-GT",
            "es-HN", "es-MX", "es-NI", "es-PA", "es-PE", "es-PR", "es-SV", "es-VE", "pt-BR",
        ],
    ),
    (CalendarType::Hebrew, &["he", "he-IL"]),
    (
        CalendarType::Islamic,
        &[
            // ar-LB and ar-MA follow ISO weeks
            "ar", "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IQ", "ar-JO", "ar-KW", "ar-LY", "ar-OM",
            "ar-QA", "ar-SA", "ar-SD", "ar-SY", "ar-YE", "dv", "dv-MV", "ps", "ps-AR",
        ],
    ),
];
