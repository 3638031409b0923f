//! Sales ledger storage.

use crate::model::sale::SaleRecord;

/// Append-only storage for completed sales.
pub trait SalesRepository {
    fn append_sale(&mut self, sale: SaleRecord);
    fn list_sales(&self) -> &[SaleRecord];
}

#[derive(Debug, Default)]
pub struct InMemorySalesRepository {
    sales: Vec<SaleRecord>,
}

impl InMemorySalesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SalesRepository for InMemorySalesRepository {
    fn append_sale(&mut self, sale: SaleRecord) {
        self.sales.push(sale);
    }

    fn list_sales(&self) -> &[SaleRecord] {
        &self.sales
    }
}
