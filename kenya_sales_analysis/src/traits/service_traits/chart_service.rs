use crate::common::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a line chart from time-series data and save it as an image file
        # Arguments
        * `title` - Chart title
        * `x_labels` - Labels for X-axis (e.g., `YYYY-MM` months)
        * `y_data` - Data points for Y-axis
        * `output_path` - Path where the chart image will be saved
        * `x_label` - Label for X-axis
        * `y_label` - Label for Y-axis
    "]
    async fn generate_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        output_path: &Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()>;

    #[doc = "Generate a vertical bar chart, one bar per category, in the given order."]
    async fn generate_bar_chart(
        &self,
        title: &str,
        categories: Vec<String>,
        values: Vec<i64>,
        output_path: &Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()>;

    #[doc = "Generate a pie chart whose slices are labelled with their percentage of the whole."]
    async fn generate_pie_chart(
        &self,
        title: &str,
        labels: Vec<String>,
        values: Vec<f64>,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
