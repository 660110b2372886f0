use std::collections::HashSet;
use std::io::Cursor;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use timesheetcal::configuration::TimesheetConfiguration;
use timesheetcal::timesheet::descriptionresolver::DescriptionResolver;
use timesheetcal::timesheet::monthsheet::MonthSheetBuilder;
use timesheetcal::timesheet::personcontext::PersonContext;
use timesheetcal::timesheet::workingdayscounter::WorkingDaysCounter;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn community_holiday_label_has_no_institution_prefix() {
    let config = TimesheetConfiguration::default();
    let classifier = config.classifier();
    let resolver = DescriptionResolver::new(&classifier, config.labels());

    let description = resolver.describe(ymd(2024, 9, 27), 1, 30, 2024, &HashSet::new(), None);
    assert_eq!(description.label, "Fête de la Communauté française");
    assert!(!description.label.starts_with("Congé UMONS"));
}

#[test]
fn december_sheet_from_json_configuration() {
    let json = r#"{
        "sampler": {"min_hours": 6.0, "max_hours": 8.0, "under_min_probability": 0.0}
    }"#;
    let config = TimesheetConfiguration::from_json_reader(Cursor::new(json)).unwrap();
    let classifier = config.classifier();
    let sampler = config.sampler().unwrap();
    let person = PersonContext::new([ymd(2025, 12, 1)])
        .with_sick_days([ymd(2025, 12, 2)])
        .with_half_days([ymd(2025, 12, 3)]);

    let counts = WorkingDaysCounter::new(&classifier)
        .count_for(2025, 12, 1, 31, &person)
        .unwrap();
    // 23 weekdays; Dec 25 national; Dec 22, 23, 24, 26, 29, 30, 31 institution.
    assert_eq!(counts.full_days, 12);
    assert_eq!(counts.half_days, 1);

    let mut rng = StdRng::seed_from_u64(99);
    let sheet = MonthSheetBuilder::new(&classifier, config.labels(), &sampler)
        .build(2025, 12, 1, 31, &person, &mut rng)
        .unwrap();

    assert_eq!(sheet.working_days, counts);
    let labels: Vec<&str> = sheet.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels[0], "Congé chercheur");
    assert_eq!(labels[1], "Congé maladie");
    assert_eq!(labels[5], "Weekend");
    assert_eq!(labels[21], "Récupération du 27/09/2025");
    assert_eq!(labels[23], "Congé UMONS - Vacances d'hiver");
    assert_eq!(labels[24], "JF - Noël");

    let full_hours: Vec<f64> = sheet.rows
        .iter()
        .filter(|r| r.date != ymd(2025, 12, 3))
        .filter_map(|r| r.hours)
        .collect();
    assert_eq!(full_hours.len(), 12);
    assert!(full_hours.iter().sum::<f64>() / 12.0 >= 6.2);

    let json = serde_json::to_value(&sheet).unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 31);
}
