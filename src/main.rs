use std::env;
use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::error;
use tracing_subscriber::EnvFilter;

use timesheetcal::configuration::TimesheetConfiguration;
use timesheetcal::timesheet::monthsheet::MonthSheetBuilder;
use timesheetcal::timesheet::personcontext::PersonContext;
use timesheetcal::time::utility::days_of_month;

const USAGE: &str = "usage: timesheetcal <config.json|-> <year> <month> [first_day last_day]";

fn run(args: &[String]) -> Result<String, Box<dyn std::error::Error>> {
    if args.len() != 3 && args.len() != 5 {
        return Err(USAGE.into());
    }

    let config = if args[0] == "-" {
        TimesheetConfiguration::default()
    } else {
        TimesheetConfiguration::from_reader(&args[0])?
    };
    let year: i32 = args[1].parse()?;
    let month: u32 = args[2].parse()?;
    let (first_day, last_day) = if args.len() == 5 {
        (args[3].parse()?, args[4].parse()?)
    } else {
        (1, days_of_month(year, month))
    };

    let classifier = config.classifier();
    let sampler = config.sampler()?;
    let mut rng = StdRng::from_entropy();
    let sheet = MonthSheetBuilder::new(&classifier, config.labels(), &sampler)
        .build(year, month, first_day, last_day, &PersonContext::default(), &mut rng)?;

    Ok(serde_json::to_string_pretty(&sheet)?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        },
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
