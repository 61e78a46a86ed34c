use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Source of "now". Calendar days are counted in the clock's time zone,
/// so watering dates follow its daylight-saving changes.
pub trait Clock {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;
}

/// Wall clock in the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a given instant, for tests and replays.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone = FixedOffset>(pub DateTime<Tz>);

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.0.clone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    type Tz = C::Tz;

    fn now(&self) -> DateTime<C::Tz> {
        (**self).now()
    }
}

/// Central European time for 2024, switching to summer time on
/// 2024-03-31 at 01:00 UTC. Only the spring change is modelled.
#[cfg(test)]
pub(crate) mod central_europe {
    use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CentralEurope2024;

    fn winter() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    fn summer() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    fn spring_forward() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap()
    }

    fn offset_at(utc: &NaiveDateTime) -> FixedOffset {
        if *utc < spring_forward() {
            winter()
        } else {
            summer()
        }
    }

    impl TimeZone for CentralEurope2024 {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            CentralEurope2024
        }

        fn offset_from_local_date(&self, _local: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(winter())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let as_winter = offset_at(&(*local - winter())) == winter();
            let as_summer = offset_at(&(*local - summer())) == summer();
            match (as_winter, as_summer) {
                (true, true) => LocalResult::Ambiguous(winter(), summer()),
                (true, false) => LocalResult::Single(winter()),
                (false, true) => LocalResult::Single(summer()),
                (false, false) => LocalResult::None,
            }
        }

        fn offset_from_utc_date(&self, _utc: &NaiveDate) -> FixedOffset {
            winter()
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            offset_at(utc)
        }
    }
}
