use std::collections::{BTreeMap, HashMap};

/// Source of protein stock concentrations (µM).
///
/// `None` and non-positive values both mean the stock is unknown.
pub trait StockLookup {
    fn stock_concentration(&self, protein: &str) -> Option<f64>;
}

impl<T> StockLookup for &T
where
    T: StockLookup + ?Sized,
{
    fn stock_concentration(&self, protein: &str) -> Option<f64> {
        (**self).stock_concentration(protein)
    }
}

impl StockLookup for HashMap<String, f64> {
    fn stock_concentration(&self, protein: &str) -> Option<f64> {
        self.get(protein).copied()
    }
}

impl StockLookup for BTreeMap<String, f64> {
    fn stock_concentration(&self, protein: &str) -> Option<f64> {
        self.get(protein).copied()
    }
}
