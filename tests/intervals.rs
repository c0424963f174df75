#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use tempo::db::intervals::Intervals;
    use tempo::libs::interval::IntervalKind;
    use test_context::{test_context, TestContext};

    struct IntervalsTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for IntervalsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            IntervalsTestContext { temp_dir }
        }
    }

    impl IntervalsTestContext {
        fn open_store(&self) -> Intervals {
            Intervals::open(&self.temp_dir.path().join("tempo.db")).unwrap()
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_schema_is_idempotent(ctx: &mut IntervalsTestContext) {
        let first = ctx.open_store();
        first.insert(day(2025, 6, 2), 1000.0, IntervalKind::Active).unwrap();
        drop(first);

        // Re-opening the same file must not fail or lose rows.
        let second = ctx.open_store();
        assert_eq!(second.current_mode().unwrap(), Some(IntervalKind::Active));
        assert_eq!(second.current_day().unwrap(), Some(day(2025, 6, 2)));
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_insert_and_close(ctx: &mut IntervalsTestContext) {
        let intervals = ctx.open_store();

        intervals.insert(day(2025, 6, 2), 1000.0, IntervalKind::Active).unwrap();
        assert_eq!(intervals.open_count().unwrap(), 1);
        assert_eq!(intervals.current_mode().unwrap(), Some(IntervalKind::Active));

        intervals.close_open(1500.0).unwrap();
        assert_eq!(intervals.open_count().unwrap(), 0);
        assert_eq!(intervals.current_mode().unwrap(), None);
        assert_eq!(intervals.current_day().unwrap(), None);

        let rows = intervals.fetch_day(day(2025, 6, 2)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].end_ts, Some(1500.0));
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_close_open_reconciles_every_open_row(ctx: &mut IntervalsTestContext) {
        let intervals = ctx.open_store();

        // Simulate a crash that left two rows open.
        intervals.insert(day(2025, 6, 2), 1000.0, IntervalKind::Active).unwrap();
        intervals.insert(day(2025, 6, 2), 1200.0, IntervalKind::Pause).unwrap();
        assert_eq!(intervals.open_count().unwrap(), 2);

        intervals.close_open(2000.0).unwrap();

        let rows = intervals.fetch_day(day(2025, 6, 2)).unwrap();
        assert_eq!(rows.len(), 2);
        for row in rows {
            assert_eq!(row.end_ts, Some(2000.0));
        }
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_transition_leaves_exactly_one_open_row(ctx: &mut IntervalsTestContext) {
        let intervals = ctx.open_store();

        intervals.insert(day(2025, 6, 2), 1000.0, IntervalKind::Active).unwrap();
        intervals.transition(1500.0, day(2025, 6, 2), IntervalKind::Pause).unwrap();

        assert_eq!(intervals.open_count().unwrap(), 1);
        assert_eq!(intervals.current_mode().unwrap(), Some(IntervalKind::Pause));

        let rows = intervals.fetch_day(day(2025, 6, 2)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, IntervalKind::Active);
        assert_eq!(rows[0].end_ts, Some(1500.0));
        assert_eq!(rows[1].kind, IntervalKind::Pause);
        assert_eq!(rows[1].start_ts, 1500.0);
        assert!(rows[1].end_ts.is_none());
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_daily_totals_ordered_newest_first(ctx: &mut IntervalsTestContext) {
        let intervals = ctx.open_store();

        // One closed one-hour active interval per day for a week.
        for offset in 0..7u32 {
            let d = day(2025, 6, 2 + offset);
            let start = 1000.0 + f64::from(offset) * 100_000.0;
            intervals.insert(d, start, IntervalKind::Active).unwrap();
            intervals.close_open(start + 3600.0).unwrap();
        }

        let totals = intervals.daily_totals(day(2025, 6, 2), 0.0).unwrap();
        assert_eq!(totals.len(), 7);
        for (i, (d, secs)) in totals.iter().enumerate() {
            assert_eq!(*d, day(2025, 6, 8 - i as u32));
            assert!((secs - 3600.0).abs() < 1e-6);
        }
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_daily_totals_excludes_pause_and_older_days(ctx: &mut IntervalsTestContext) {
        let intervals = ctx.open_store();

        intervals.insert(day(2025, 6, 1), 1000.0, IntervalKind::Active).unwrap();
        intervals.close_open(1600.0).unwrap();
        intervals.insert(day(2025, 6, 2), 2000.0, IntervalKind::Active).unwrap();
        intervals.close_open(2900.0).unwrap();
        intervals.insert(day(2025, 6, 2), 3000.0, IntervalKind::Pause).unwrap();
        intervals.close_open(9000.0).unwrap();

        let totals = intervals.daily_totals(day(2025, 6, 2), 0.0).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].0, day(2025, 6, 2));
        assert!((totals[0].1 - 900.0).abs() < 1e-6);
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_open_interval_counts_up_to_now(ctx: &mut IntervalsTestContext) {
        let intervals = ctx.open_store();

        intervals.insert(day(2025, 6, 2), 1000.0, IntervalKind::Active).unwrap();

        let totals = intervals.daily_totals(day(2025, 6, 2), 1090.0).unwrap();
        assert_eq!(totals.len(), 1);
        assert!((totals[0].1 - 90.0).abs() < 1e-6);

        let rows = intervals.fetch_day(day(2025, 6, 2)).unwrap();
        assert!((rows[0].duration_secs(1090.0) - 90.0).abs() < 1e-6);
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_duration_attributed_to_start_day(ctx: &mut IntervalsTestContext) {
        let intervals = ctx.open_store();

        // A row that conceptually runs past midnight keeps its start day;
        // the whole 30 hours land on June 2nd.
        intervals.insert(day(2025, 6, 2), 1000.0, IntervalKind::Active).unwrap();
        intervals.close_open(1000.0 + 30.0 * 3600.0).unwrap();

        let totals = intervals.daily_totals(day(2025, 6, 2), 0.0).unwrap();
        assert_eq!(totals.len(), 1);
        assert!((totals[0].1 - 30.0 * 3600.0).abs() < 1e-6);
    }

    #[test_context(IntervalsTestContext)]
    #[test]
    fn test_daily_breakdown_reports_both_kinds(ctx: &mut IntervalsTestContext) {
        let intervals = ctx.open_store();

        intervals.insert(day(2025, 6, 2), 1000.0, IntervalKind::Active).unwrap();
        intervals.close_open(2000.0).unwrap();
        intervals.insert(day(2025, 6, 2), 2000.0, IntervalKind::Pause).unwrap();
        intervals.close_open(2300.0).unwrap();

        let breakdown = intervals.daily_breakdown(day(2025, 6, 2), 0.0).unwrap();
        assert_eq!(breakdown.len(), 1);
        assert!((breakdown[0].active_secs - 1000.0).abs() < 1e-6);
        assert!((breakdown[0].pause_secs - 300.0).abs() < 1e-6);
    }
}
