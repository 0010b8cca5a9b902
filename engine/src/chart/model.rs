// View state of a chart screen: selected range, its dataset and the pressed point
use super::domain::{calculate_domain, Domain};
use super::layout::ChartLayout;
use super::tooltip::{TextMeasurer, Tooltip};
use crate::config::settings::ChartSettings;
use crate::data::DataSource;
use crate::error::{EngineError, Result};
use shared::{DataPoint, Range};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    range: Range,
    data: Vec<DataPoint>,
    active: Option<usize>,
}

impl BarChartModel {
    pub fn new(source: &mut dyn DataSource) -> Self {
        let range = Range::default();
        let data = source.generate(range);
        debug!(source = source.name(), %range, ?data, "Initial dataset generated");
        Self {
            range,
            data,
            active: None,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Regenerates the whole dataset for `range`; nothing from the previous range survives.
    pub fn select_range(&mut self, range: Range, source: &mut dyn DataSource) {
        info!(from = %self.range, to = %range, "Chart range changed");
        self.range = range;
        self.data = source.generate(range);
        self.active = None;
        debug!(source = source.name(), points = self.data.len(), data = ?self.data, "Dataset regenerated");
    }

    pub fn select_range_id(&mut self, id: &str, source: &mut dyn DataSource) -> Result<()> {
        let range: Range = id.parse()?;
        self.select_range(range, source);
        Ok(())
    }

    pub fn press(&mut self, index: usize) -> Result<()> {
        if index >= self.data.len() {
            return Err(EngineError::PointOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        self.active = Some(index);
        Ok(())
    }

    pub fn release(&mut self) {
        self.active = None;
    }

    pub fn domain(&self) -> Result<Domain> {
        calculate_domain(&self.data)
    }

    pub fn layout(&self, settings: &ChartSettings) -> Result<ChartLayout> {
        Ok(ChartLayout::compute(&self.data, self.domain()?, settings))
    }

    /// Tooltip for the pressed point, if any.
    pub fn tooltip(
        &self,
        layout: &ChartLayout,
        settings: &ChartSettings,
        measurer: Option<&dyn TextMeasurer>,
    ) -> Option<Tooltip> {
        let point = layout.points.get(self.active?)?;
        Some(Tooltip::for_point(point, measurer, settings.tooltip_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::tooltip::TextMeasurer;
    use crate::data::SyntheticSource;

    /// Hands out a fixed value so stale points are easy to spot.
    struct ConstantSource(u32);

    impl DataSource for ConstantSource {
        fn name(&self) -> &str {
            "constant"
        }

        fn generate(&mut self, range: Range) -> Vec<DataPoint> {
            let n = crate::data::GenerationPolicy::for_range(range).count;
            (0..n).map(|i| DataPoint::new(format!("P{}", i), self.0)).collect()
        }
    }

    struct HalfEm(f64);

    impl TextMeasurer for HalfEm {
        fn measure_width(&self, text: &str) -> f64 {
            text.chars().count() as f64 * self.0 / 2.0
        }
    }

    #[test]
    fn starts_on_fifteen_days() {
        let model = BarChartModel::new(&mut SyntheticSource::seeded(1));
        assert_eq!(model.range(), Range::FifteenDays);
        assert_eq!(model.data().len(), 15);
        assert_eq!(model.active(), None);
    }

    #[test]
    fn switching_range_replaces_the_dataset() {
        let mut model = BarChartModel::new(&mut ConstantSource(3));
        model.select_range(Range::OneYear, &mut ConstantSource(99));
        assert_eq!(model.range(), Range::OneYear);
        assert_eq!(model.data().len(), 12);
        assert!(model.data().iter().all(|p| p.hours == 99));

        model.select_range(Range::SixMonths, &mut ConstantSource(40));
        assert_eq!(model.data().len(), 6);
        assert!(model.data().iter().all(|p| p.hours == 40));
    }

    #[test]
    fn switching_range_clears_the_press() {
        let mut source = SyntheticSource::seeded(5);
        let mut model = BarChartModel::new(&mut source);
        model.press(14).unwrap();
        model.select_range(Range::SixMonths, &mut source);
        assert_eq!(model.active(), None);
    }

    #[test]
    fn select_range_by_id() {
        let mut source = SyntheticSource::seeded(5);
        let mut model = BarChartModel::new(&mut source);
        model.select_range_id("1month", &mut source).unwrap();
        assert_eq!(model.range(), Range::OneMonth);
        assert!(matches!(
            model.select_range_id("decade", &mut source),
            Err(EngineError::UnknownRange { .. })
        ));
        assert_eq!(model.range(), Range::OneMonth);
    }

    #[test]
    fn press_outside_the_dataset_is_rejected() {
        let mut model = BarChartModel::new(&mut SyntheticSource::seeded(2));
        let err = model.press(15).unwrap_err();
        assert!(matches!(err, EngineError::PointOutOfRange { index: 15, len: 15 }));
        assert_eq!(model.active(), None);
    }

    #[test]
    fn tooltip_only_while_pressed() {
        let settings = ChartSettings::default();
        let metrics = HalfEm(settings.tooltip_font_size);
        let mut model = BarChartModel::new(&mut ConstantSource(5));
        let layout = model.layout(&settings).unwrap();
        assert!(model.tooltip(&layout, &settings, Some(&metrics)).is_none());

        model.press(2).unwrap();
        let tooltip = model.tooltip(&layout, &settings, Some(&metrics)).unwrap();
        let point = &layout.points[2];
        assert_eq!(tooltip.text, "5 hrs");
        assert_eq!(tooltip.text_y, point.y - settings.tooltip_offset);
        assert!(tooltip.text_x < point.x);

        model.release();
        assert!(model.tooltip(&layout, &settings, Some(&metrics)).is_none());
    }

    #[test]
    fn domain_tracks_current_data() {
        let model = BarChartModel::new(&mut ConstantSource(8));
        assert_eq!(model.domain().unwrap(), Domain { min: 7, max: 9 });
    }
}
