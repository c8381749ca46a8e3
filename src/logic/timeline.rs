use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    plant::{ActivityType, GrowingInfo},
    Month, MONTHS_PER_YEAR,
};

pub const DEFAULT_TOTAL_MONTHS: u32 = MONTHS_PER_YEAR as u32;

/// A contiguous run of months for one activity, in timeline fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub activity_type: ActivityType,
    pub start_month: i32,
    pub end_month: i32,
    pub fractional_start: f64,
    pub fractional_width: f64,
}

impl Segment {
    fn new(activity_type: ActivityType, start_month: Month, end_month: Month, total: u32) -> Self {
        let total = f64::from(total);
        Self {
            activity_type,
            start_month,
            end_month,
            fractional_start: f64::from(start_month) / total,
            fractional_width: f64::from(end_month - start_month + 1) / total,
        }
    }

    pub fn month_count(&self) -> u32 {
        (self.end_month - self.start_month + 1).max(0) as u32
    }
}

/// Lazily computed calendar bands for one plant.
///
/// Nothing is computed until iterated; every `iter()` starts over.
#[derive(Debug, Clone, Copy)]
pub struct Timeline<'a> {
    info: &'a GrowingInfo,
    total_months: u32,
}

impl<'a> Timeline<'a> {
    pub fn total_months(&self) -> u32 {
        self.total_months
    }

    pub fn iter(&self) -> Segments<'a> {
        Segments {
            info: self.info,
            total_months: self.total_months,
            next_activity: 0,
            current: None,
            months: Vec::new(),
            pos: 0,
        }
    }
}

impl<'a> IntoIterator for &Timeline<'a> {
    type Item = Segment;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for Timeline<'a> {
    type Item = Segment;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the segments of a [`Timeline`], activity by activity.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    info: &'a GrowingInfo,
    total_months: u32,
    next_activity: usize,
    current: Option<ActivityType>,
    /// Sorted, deduplicated months of `current`.
    months: Vec<Month>,
    pos: usize,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            if let Some(activity) = self.current {
                if let Some(&start) = self.months.get(self.pos) {
                    let mut end = start;
                    self.pos += 1;
                    while let Some(&month) = self.months.get(self.pos) {
                        if month != end + 1 {
                            break;
                        }
                        end = month;
                        self.pos += 1;
                    }
                    return Some(Segment::new(activity, start, end, self.total_months));
                }
            }

            let activity = *ActivityType::ALL.get(self.next_activity)?;
            self.next_activity += 1;
            self.months.clear();
            self.months.extend_from_slice(self.info.months(activity));
            self.months.sort_unstable();
            self.months.dedup();
            self.pos = 0;
            self.current = Some(activity);
        }
    }
}

/// Groups each activity's months into maximal runs of consecutive months.
///
/// Segments come out in activity order (start indoors, transplant, sow
/// outdoors, harvest) and ascending within an activity. Overlaps between
/// activities are kept. `total_months` must be positive; months outside
/// `0..total_months` are not corrected, so their fractions fall outside
/// `[0, 1]`.
pub fn compress(info: &GrowingInfo, total_months: u32) -> Timeline<'_> {
    Timeline { info, total_months }
}

pub fn compress_year(info: &GrowingInfo) -> Timeline<'_> {
    compress(info, DEFAULT_TOTAL_MONTHS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_with(activity: ActivityType, months: Vec<Month>) -> GrowingInfo {
        let mut info = GrowingInfo::default();
        match activity {
            ActivityType::StartIndoor => info.start_indoor_months = months,
            ActivityType::Transplant => info.transplant_months = months,
            ActivityType::SowOutdoor => info.sow_outdoor_months = months,
            ActivityType::Harvest => info.harvest_months = months,
        }
        info
    }

    fn spans(info: &GrowingInfo) -> Vec<(ActivityType, Month, Month)> {
        compress_year(info)
            .iter()
            .map(|s| (s.activity_type, s.start_month, s.end_month))
            .collect()
    }

    #[test]
    fn test_harvest_run_fractions() {
        let info = info_with(ActivityType::Harvest, vec![6, 7, 8, 9]);
        let segments: Vec<Segment> = compress(&info, 12).iter().collect();
        assert_eq!(segments.len(), 1);
        let s = segments[0];
        assert_eq!(s.activity_type, ActivityType::Harvest);
        assert_eq!((s.start_month, s.end_month), (6, 9));
        assert_eq!(s.fractional_start, 0.5);
        assert_eq!(s.fractional_width, 4.0 / 12.0);
        assert_eq!(s.month_count(), 4);
    }

    #[test]
    fn test_gaps_split_runs() {
        let info = info_with(ActivityType::SowOutdoor, vec![1, 3, 5]);
        assert_eq!(
            spans(&info),
            vec![
                (ActivityType::SowOutdoor, 1, 1),
                (ActivityType::SowOutdoor, 3, 3),
                (ActivityType::SowOutdoor, 5, 5),
            ]
        );
        let info = info_with(ActivityType::SowOutdoor, vec![1, 2, 3]);
        assert_eq!(spans(&info), vec![(ActivityType::SowOutdoor, 1, 3)]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let sorted = info_with(ActivityType::SowOutdoor, vec![1, 2, 3, 9, 10]);
        let shuffled = info_with(ActivityType::SowOutdoor, vec![10, 2, 9, 1, 3]);
        assert_eq!(spans(&sorted), spans(&shuffled));
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let info = info_with(ActivityType::Harvest, vec![4, 4, 5, 5, 6]);
        assert_eq!(spans(&info), vec![(ActivityType::Harvest, 4, 6)]);
    }

    #[test]
    fn test_empty_lists_yield_nothing() {
        assert_eq!(compress_year(&GrowingInfo::default()).iter().count(), 0);
    }

    #[test]
    fn test_activity_order_and_overlap() {
        let info = GrowingInfo {
            start_indoor_months: vec![0, 1, 2],
            transplant_months: vec![3, 4, 5],
            sow_outdoor_months: vec![3, 4, 5],
            harvest_months: vec![7, 8, 9, 10, 11],
            ..GrowingInfo::default()
        };
        assert_eq!(
            spans(&info),
            vec![
                (ActivityType::StartIndoor, 0, 2),
                (ActivityType::Transplant, 3, 5),
                (ActivityType::SowOutdoor, 3, 5),
                (ActivityType::Harvest, 7, 11),
            ]
        );
    }

    #[test]
    fn test_restartable_and_deterministic() {
        let info = info_with(ActivityType::SowOutdoor, vec![1, 2, 3, 9, 10]);
        let timeline = compress_year(&info);
        let first: Vec<Segment> = timeline.iter().collect();
        let second: Vec<Segment> = (&timeline).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, compress_year(&info).into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_months_pass_through() {
        let info = info_with(ActivityType::Harvest, vec![11, 12]);
        let segments: Vec<Segment> = compress_year(&info).iter().collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].end_month, 12);
        assert!(segments[0].fractional_start + segments[0].fractional_width > 1.0);
    }

    #[test]
    fn test_custom_timeline_length() {
        let info = info_with(ActivityType::Transplant, vec![0, 1]);
        let segment = compress(&info, 24).iter().next().unwrap();
        assert_eq!(segment.fractional_start, 0.0);
        assert_eq!(segment.fractional_width, 2.0 / 24.0);
    }
}
