use income_domain::{rust_decimal::Decimal, Job, TypeFilter};

use crate::errors::Result;
use crate::lists::JobList;

impl JobList {
    /// Take-home pay over `period_to_use`, summed across matching jobs.
    pub fn net_total(&mut self, period_to_use: u32, filter: impl Into<TypeFilter>) -> Result<Decimal> {
        let filter = filter.into();
        self.gather()?;
        if period_to_use == 0 {
            return Ok(Decimal::ZERO);
        }
        self.sum_matching(&filter, "net", |job: &Job| job.net_amount(period_to_use).map(Some))
    }

    /// Gross pay over `period_to_use`, summed across matching jobs.
    pub fn gross_total(
        &mut self,
        period_to_use: u32,
        filter: impl Into<TypeFilter>,
    ) -> Result<Decimal> {
        let filter = filter.into();
        self.gather()?;
        if period_to_use == 0 {
            return Ok(Decimal::ZERO);
        }
        self.sum_matching(&filter, "gross", |job: &Job| job.gross_amount(period_to_use).map(Some))
    }

    /// Employers named across all jobs, in first-seen order.
    pub fn employers(&mut self) -> Result<Vec<String>> {
        let mut employers: Vec<String> = Vec::new();
        for job in self.gathered()? {
            if let Some(name) = job.employer.as_deref() {
                if !employers.iter().any(|existing| existing == name) {
                    employers.push(name.to_string());
                }
            }
        }
        Ok(employers)
    }
}
