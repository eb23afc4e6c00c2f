use crate::common::*;
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{format_utils::*, io_utils::*};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;

const BACKGROUND: RGBColor = RGBColor(20, 20, 20);
const GRID_COLOR: RGBColor = RGBColor(60, 60, 60);
const AXIS_COLOR: RGBColor = RGBColor(120, 120, 120);
const TEXT_COLOR: RGBColor = RGBColor(200, 200, 200);
const TITLE_COLOR: RGBColor = RGBColor(240, 240, 240);
const LINE_COLOR: RGBColor = RGBColor(0, 191, 255);

const SLICE_COLORS: [RGBColor; 6] = [
    RGBColor(0, 191, 255),
    RGBColor(255, 140, 0),
    RGBColor(50, 205, 50),
    RGBColor(220, 20, 60),
    RGBColor(186, 85, 211),
    RGBColor(255, 215, 0),
];

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(&self, values: &[f64]) -> (f64, f64) {
        if values.is_empty() {
            return (0.0, 100.0);
        }

        let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let padding: f64 = ((max_val - min_val) * 0.1).max(1.0);

        let y_min: f64 = (min_val - padding).max(0.0);
        let y_max: f64 = max_val + padding;

        (y_min, y_max)
    }

    #[doc = "Bars start at zero; the top leaves 10% headroom."]
    fn calculate_bar_ceiling(&self, values: &[i64]) -> i64 {
        let max_val: i64 = values.iter().copied().max().unwrap_or(0).max(0);
        (max_val + max_val / 10).max(1)
    }

    fn check_series(
        caller: &str,
        labels_len: usize,
        values_len: usize,
    ) -> anyhow::Result<()> {
        if labels_len != values_len {
            return Err(anyhow!(
                "[ChartServiceImpl->{}] Labels and values must have the same length: {} vs {}",
                caller,
                labels_len,
                values_len
            ));
        }

        if labels_len == 0 {
            return Err(anyhow!(
                "[ChartServiceImpl->{}] Cannot generate chart with empty data",
                caller
            ));
        }

        Ok(())
    }

    #[doc = "Runs synchronous plotters drawing on the blocking pool and waits for it."]
    async fn draw_blocking<F>(caller: &str, output_path: &Path, draw: F) -> anyhow::Result<()>
    where
        F: FnOnce(String) -> anyhow::Result<()> + Send + 'static,
    {
        ensure_parent_dir(output_path)
            .with_context(|| format!("[ChartServiceImpl->{}] output directory", caller))?;

        let output_path_str: String = output_path.to_string_lossy().to_string();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || draw(output_path_str));

        let drawing_result: Result<(), anyhow::Error> = handle.await.with_context(|| {
            format!(
                "[ChartServiceImpl->{}] blocking task join failed (panic/cancelled)",
                caller
            )
        })?;

        drawing_result
            .with_context(|| format!("[ChartServiceImpl->{}] drawing/present failed", caller))?;

        info!("Chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        output_path: &Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()> {
        Self::check_series("generate_line_chart", x_labels.len(), y_data.len())?;

        let title: String = title.to_string();
        let x_label: String = x_label.to_string();
        let y_label: String = y_label.to_string();

        /* Calculate y_range before moving into closure */
        let (y_min, y_max) = self.calculate_y_range(&y_data);
        let x_max: usize = x_labels.len().saturating_sub(1).max(1);

        Self::draw_blocking("generate_line_chart", output_path, move |path| {
            let root = BitMapBackend::new(&path, (1400, 700)).into_drawing_area();
            root.fill(&BACKGROUND)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&title, ("sans-serif", 40).into_font().color(&TITLE_COLOR))
                .margin(30)
                .x_label_area_size(90)
                .y_label_area_size(110)
                .build_cartesian_2d(0..x_max, y_min..y_max)?;

            chart
                .configure_mesh()
                .x_desc(&x_label)
                .y_desc(&y_label)
                .x_labels(x_labels.len())
                .y_labels(10)
                .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
                .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
                .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
                .x_label_style(
                    ("sans-serif", 14)
                        .into_font()
                        .color(&TEXT_COLOR)
                        .transform(FontTransform::Rotate90),
                )
                .y_label_style(("sans-serif", 20).into_font().color(&TEXT_COLOR))
                .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
                .y_label_formatter(&|y| format_amount(*y))
                .draw()?;

            chart.draw_series(LineSeries::new(
                y_data.iter().enumerate().map(|(i, &y)| (i, y)),
                ShapeStyle::from(&LINE_COLOR).stroke_width(3),
            ))?;

            /* Point markers */
            chart.draw_series(
                y_data
                    .iter()
                    .enumerate()
                    .map(|(i, &y)| Circle::new((i, y), 5, LINE_COLOR.filled())),
            )?;

            root.present()?;
            Ok(())
        })
        .await
    }

    async fn generate_bar_chart(
        &self,
        title: &str,
        categories: Vec<String>,
        values: Vec<i64>,
        output_path: &Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()> {
        Self::check_series("generate_bar_chart", categories.len(), values.len())?;

        let title: String = title.to_string();
        let x_label: String = x_label.to_string();
        let y_label: String = y_label.to_string();
        let y_max: i64 = self.calculate_bar_ceiling(&values);
        let bar_count: usize = categories.len();

        Self::draw_blocking("generate_bar_chart", output_path, move |path| {
            let root = BitMapBackend::new(&path, (1500, 800)).into_drawing_area();
            root.fill(&BACKGROUND)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&title, ("sans-serif", 40).into_font().color(&TITLE_COLOR))
                .margin(30)
                .x_label_area_size(160)
                .y_label_area_size(130)
                .build_cartesian_2d((0..bar_count).into_segmented(), 0i64..y_max)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_desc(&x_label)
                .y_desc(&y_label)
                .x_labels(bar_count)
                .y_labels(10)
                .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
                .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
                .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
                .x_label_style(
                    ("sans-serif", 16)
                        .into_font()
                        .color(&TEXT_COLOR)
                        .transform(FontTransform::Rotate90),
                )
                .y_label_style(("sans-serif", 20).into_font().color(&TEXT_COLOR))
                .x_label_formatter(&|segment| match segment {
                    SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                        categories.get(*i).cloned().unwrap_or_default()
                    }
                    SegmentValue::Last => String::new(),
                })
                .y_label_formatter(&|y| format_thousands(*y))
                .draw()?;

            chart.draw_series(
                Histogram::vertical(&chart)
                    .style(LINE_COLOR.filled())
                    .margin(12)
                    .data(values.iter().enumerate().map(|(i, &v)| (i, v))),
            )?;

            root.present()?;
            Ok(())
        })
        .await
    }

    async fn generate_pie_chart(
        &self,
        title: &str,
        labels: Vec<String>,
        values: Vec<f64>,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        Self::check_series("generate_pie_chart", labels.len(), values.len())?;

        if values.iter().any(|v| *v < 0.0) || values.iter().sum::<f64>() <= 0.0 {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_pie_chart] Slices must be non-negative with a positive total"
            ));
        }

        let title: String = title.to_string();
        let colors: Vec<RGBColor> = (0..values.len())
            .map(|i| SLICE_COLORS[i % SLICE_COLORS.len()])
            .collect();

        Self::draw_blocking("generate_pie_chart", output_path, move |path| {
            let root = BitMapBackend::new(&path, (1000, 1000)).into_drawing_area();
            root.fill(&BACKGROUND)?;

            let root = root.titled(&title, ("sans-serif", 40).into_font().color(&TITLE_COLOR))?;

            let (width, height) = root.dim_in_pixel();
            let center: (i32, i32) = (width as i32 / 2, height as i32 / 2);
            let radius: f64 = f64::from(width.min(height)) * 0.35;

            let mut pie = Pie::new(&center, &radius, &values, &colors, &labels);
            pie.start_angle(90.0);
            pie.label_style(("sans-serif", 28).into_font().color(&TEXT_COLOR));
            pie.percentages(("sans-serif", radius * 0.08).into_font().color(&BLACK));
            root.draw(&pie)?;

            root.present()?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_range_is_padded_and_floored_at_zero() {
        let service = ChartServiceImpl::new();
        assert_eq!(service.calculate_y_range(&[]), (0.0, 100.0));

        let (y_min, y_max) = service.calculate_y_range(&[100.0, 200.0]);
        assert_eq!(y_min, 90.0);
        assert_eq!(y_max, 210.0);

        let (y_min, _) = service.calculate_y_range(&[1.0, 50.0]);
        assert_eq!(y_min, 0.0);
    }

    #[test]
    fn bar_ceiling_leaves_headroom() {
        let service = ChartServiceImpl::new();
        assert_eq!(service.calculate_bar_ceiling(&[1000, 5000]), 5500);
        assert_eq!(service.calculate_bar_ceiling(&[]), 1);
    }

    #[tokio::test]
    async fn mismatched_series_is_rejected_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        let service = ChartServiceImpl::new();

        let result = service
            .generate_bar_chart("t", vec!["a".to_string()], vec![1, 2], &path, "x", "y")
            .await;
        assert!(result.is_err());

        let result = service
            .generate_line_chart("t", Vec::new(), Vec::new(), &path, "x", "y")
            .await;
        assert!(result.is_err());

        let result = service
            .generate_pie_chart("t", vec!["a".to_string()], vec![0.0], &path)
            .await;
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn drawing_creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("charts").join("daily").join("trend.png");

        let expected: String = output_path.to_string_lossy().to_string();
        ChartServiceImpl::draw_blocking("test", &output_path, move |path| {
            assert_eq!(path, expected);
            Ok(())
        })
        .await
        .unwrap();

        assert!(dir.path().join("charts").join("daily").is_dir());
    }

    #[tokio::test]
    async fn drawing_fails_when_output_directory_cannot_be_created() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = ChartServiceImpl::draw_blocking(
            "test",
            &blocker.join("trend.png"),
            |_| Ok(()),
        )
        .await;

        assert!(result.is_err());
    }
}
