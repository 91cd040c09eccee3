use csv::WriterBuilder;
use std::io::Write;

use super::Series;
use crate::error::BacError;

const HEADER: [&str; 2] = ["time_h", "bac_g_per_l"];

impl Series {
    /// Write the series as CSV with a `time_h,bac_g_per_l` header
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), BacError> {
        let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

        writer
            .write_record(HEADER)
            .map_err(|e| BacError::Csv(e.to_string()))?;

        for sample in self {
            writer
                .write_record([sample.t.to_string(), sample.bac.to_string()])
                .map_err(|e| BacError::Csv(e.to_string()))?;
        }

        writer.flush().map_err(|e| BacError::Csv(e.to_string()))?;
        Ok(())
    }

    /// Render the series as a CSV string
    pub fn to_csv(&self) -> Result<String, BacError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| BacError::Csv(e.to_string()))
    }

    /// Serialize the series as a JSON array of `{t, bac}` objects
    pub fn to_json(&self) -> Result<String, BacError> {
        Ok(serde_json::to_string(self)?)
    }
}
