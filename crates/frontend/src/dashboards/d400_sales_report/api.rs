use contracts::dashboards::d400_sales_report::{SalesReportRequest, SalesReportRow};

use crate::shared::api_error::ApiError;
use crate::shared::http;

pub async fn get_sales_report(req: &SalesReportRequest) -> Result<Vec<SalesReportRow>, ApiError> {
    let url = http::with_query("/reports/sales", &[("from", req.from.as_str()), ("to", req.to.as_str())]);
    http::get_json(&url).await
}

/// `from` не позже `to`; пустые даты недопустимы
pub fn validate_range(req: &SalesReportRequest) -> Result<(), String> {
    if req.from.is_empty() || req.to.is_empty() {
        return Err("Indique las fechas desde y hasta".to_string());
    }
    if req.from > req.to {
        return Err("La fecha inicial no puede ser posterior a la final".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(from: &str, to: &str) -> SalesReportRequest {
        SalesReportRequest {
            from: from.into(),
            to: to.into(),
        }
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(&req("2024-05-01", "2024-05-31")).is_ok());
        assert!(validate_range(&req("2024-05-01", "2024-05-01")).is_ok());
        assert!(validate_range(&req("2024-06-01", "2024-05-31")).is_err());
        assert!(validate_range(&req("", "2024-05-31")).is_err());
    }
}
