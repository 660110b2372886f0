pub mod configuration;
pub mod configurationerror;

pub mod math {
    pub mod round;
}

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod calendarerror;
        pub mod holidayentry;
        pub mod holidayprovider;
        pub mod translation;
        pub mod institutionholidaytable;
        pub mod weekendmask;
        pub mod yearindex;
        pub mod calendarclassifier;
    }
}

pub mod timesheet {
    pub mod daylabels;
    pub mod personcontext;
    pub mod descriptionresolver;
    pub mod workingdayscounter;
    pub mod durationsampler;
    pub mod monthsheet;
}
