use crate::api::ChartSeries;

/// The currently displayed trend line, built from the last successful trade
/// response. The app owns at most one of these; each success replaces the
/// whole model, dropping the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    points: Vec<[f64; 2]>,
    labels: Vec<String>,
}

impl ChartModel {
    pub fn from_series(series: &ChartSeries) -> Self {
        let points = series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| [i as f64, *v])
            .collect();
        Self {
            points,
            labels: series.labels.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Axis text for a grid mark. Marks land on fractional x positions when
    /// zoomed, so anything off an integer index renders as empty, and labels
    /// missing from a ragged response fall back to the point index.
    pub fn axis_label(&self, value: f64) -> String {
        let idx = value.round();
        if (value - idx).abs() > 0.25 || idx < 0.0 {
            return String::new();
        }
        let idx = idx as usize;
        if idx >= self.points.len() {
            return String::new();
        }
        match self.labels.get(idx) {
            Some(label) => label.clone(),
            None => idx.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(labels: &[&str], values: &[f64]) -> ChartSeries {
        ChartSeries {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn builds_one_point_per_value() {
        let model = ChartModel::from_series(&series(&["Mon", "Tue", "Wed"], &[1.0, 2.5, 2.0]));
        assert_eq!(model.len(), 3);
        assert_eq!(model.points()[1], [1.0, 2.5]);
    }

    #[test]
    fn ragged_labels_fall_back_to_index() {
        let model = ChartModel::from_series(&series(&["Mon", "Tue"], &[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(model.len(), 4);
        assert_eq!(model.axis_label(1.0), "Tue");
        assert_eq!(model.axis_label(3.0), "3");
    }

    #[test]
    fn off_grid_and_out_of_range_marks_are_blank() {
        let model = ChartModel::from_series(&series(&["Mon"], &[1.0]));
        assert_eq!(model.axis_label(0.4), "");
        assert_eq!(model.axis_label(-1.0), "");
        assert_eq!(model.axis_label(5.0), "");
    }

    #[test]
    fn empty_series_makes_an_empty_model() {
        let model = ChartModel::from_series(&series(&[], &[]));
        assert!(model.is_empty());
    }
}
