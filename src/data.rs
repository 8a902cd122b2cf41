// src/data.rs
//
// Canonical scrape output.
//
// - PriceRecord: one scraped asset, in page order.
// - DataSet: the headers + string rows shape that export and table
//            rendering consume. Built once from records; never mutated.

pub const HEADERS: [&str; 6] = ["Timestamp", "Rank", "Name", "Price", "24h Change (%)", "Market Cap"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceRecord {
    pub timestamp: String,
    pub rank: u32,
    pub name: String,
    pub price: String,
    pub change_24h: String,
    pub market_cap: String,
}

impl PriceRecord {
    /// Row in `HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.rank.to_string(),
            self.name.clone(),
            self.price.clone(),
            self.change_24h.clone(),
            self.market_cap.clone(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_records(records: &[PriceRecord]) -> Self {
        Self {
            headers: Some(HEADERS.iter().map(|h| s!(*h)).collect()),
            rows: records.iter().map(PriceRecord::to_row).collect(),
        }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc() -> PriceRecord {
        PriceRecord {
            timestamp: s!("2026-10-18 09:00:00"),
            rank: 1,
            name: s!("Bitcoin"),
            price: s!("67123.45"),
            change_24h: s!("-1.20"),
            market_cap: s!("1323456789012"),
        }
    }

    #[test]
    fn row_matches_header_order() {
        let row = btc().to_row();
        assert_eq!(row.len(), HEADERS.len());
        assert_eq!(row[1], "1");
        assert_eq!(row[4], "-1.20");
    }

    #[test]
    fn dataset_keeps_record_order() {
        let mut eth = btc();
        eth.rank = 2;
        eth.name = s!("Ethereum");
        let ds = DataSet::from_records(&[btc(), eth]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[0][2], "Bitcoin");
        assert_eq!(ds.rows[1][2], "Ethereum");
        assert_eq!(ds.headers.as_ref().map(|h| h[4].as_str()), Some("24h Change (%)"));
    }
}
