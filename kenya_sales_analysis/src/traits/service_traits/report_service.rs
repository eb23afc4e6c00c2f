use crate::common::*;

use crate::dto::sales_analysis::*;

pub trait ReportService {
    #[doc = "Writes the summary block, the product insights and the regional insights to `out`."]
    fn write_console_report(
        &self,
        analysis: &SalesAnalysis,
        out: &mut dyn Write,
    ) -> anyhow::Result<()>;
}
