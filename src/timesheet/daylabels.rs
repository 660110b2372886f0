use serde::{Deserialize, Serialize};

use crate::time::calendar::institutionholidaytable::InstitutionHolidayCategory;

/// Display texts used when describing a day.
///
/// `makeup_day_phrase` and `community_holiday_phrase` are only used to
/// categorize institution labels that come without an explicit category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayLabels {
    pub out_of_range: String,
    pub weekend: String,
    pub national_holiday_prefix: String,
    pub institution_holiday_prefix: String,
    pub researcher_leave: String,
    pub sick_leave: String,
    pub makeup_day_phrase: String,
    pub community_holiday_phrase: String
}

impl DayLabels {
    pub fn national_holiday(&self, name: &str) -> String {
        format!("{}{}", self.national_holiday_prefix, name)
    }

    pub fn institution_holiday(&self, label: &str) -> String {
        format!("{}{}", self.institution_holiday_prefix, label)
    }

    pub fn infer_category(&self, label: &str) -> InstitutionHolidayCategory {
        InstitutionHolidayCategory::infer(label, &self.makeup_day_phrase, &self.community_holiday_phrase)
    }
}

impl Default for DayLabels {
    fn default() -> Self {
        DayLabels {
            out_of_range: "Hors convention".to_owned(),
            weekend: "Weekend".to_owned(),
            national_holiday_prefix: "JF - ".to_owned(),
            institution_holiday_prefix: "Congé UMONS - ".to_owned(),
            researcher_leave: "Congé chercheur".to_owned(),
            sick_leave: "Congé maladie".to_owned(),
            makeup_day_phrase: "Récupération".to_owned(),
            community_holiday_phrase: "Fête de la Communauté française".to_owned()
        }
    }
}
