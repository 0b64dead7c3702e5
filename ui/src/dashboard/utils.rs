use api::JobCategory;

use crate::t;

/// Card heading for a category.
pub(crate) fn category_title(category: JobCategory) -> String {
    match category {
        JobCategory::DataEngineer => t!("card-data-engineer"),
        JobCategory::JuniorDataEngineer => t!("card-junior"),
        JobCategory::SeniorDataEngineer => t!("card-senior"),
    }
}

/// Chart legend / tooltip name for a category.
pub(crate) fn series_label(category: JobCategory) -> String {
    match category {
        JobCategory::DataEngineer => t!("series-data-engineer"),
        JobCategory::JuniorDataEngineer => t!("series-junior"),
        JobCategory::SeniorDataEngineer => t!("series-senior"),
    }
}

/// Colour modifier shared by cards, chart lines and table columns.
pub(crate) fn category_tone(category: JobCategory) -> &'static str {
    match category {
        JobCategory::DataEngineer => "blue",
        JobCategory::JuniorDataEngineer => "green",
        JobCategory::SeniorDataEngineer => "amber",
    }
}
