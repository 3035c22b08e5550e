use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::country::country;
use super::manufacturer::{is_small_manufacturer, manufacturer, manufacturer_code, serial_number};
use super::model_year::model_year;
use super::region::{Region, region};
use crate::core::Vin;

/// Everything the built-in tables can tell about a VIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    /// The decoded VIN.
    pub vin: Vin,
    /// Geographic zone of the first WMI character.
    pub region: Option<Region>,
    /// Country from the first two WMI characters.
    pub country: Option<&'static str>,
    /// Manufacturer name, if the WMI is in the built-in table.
    pub manufacturer: Option<&'static str>,
    /// WMI, plus positions 12-14 for small-volume manufacturers.
    pub manufacturer_code: String,
    /// Whether the WMI ends in `9`.
    pub small_manufacturer: bool,
    /// Resolved model year (position 10).
    pub model_year: Option<i32>,
    /// Assembly plant code (position 11).
    pub plant_code: char,
    /// Production sequence number.
    pub serial_number: String,
}

/// Decode `vin` against the reference tables.
///
/// `reference` resolves the model year cycle outside North America;
/// pass today's date for live data.
pub fn describe(vin: &Vin, reference: NaiveDate) -> Description {
    Description {
        vin: vin.clone(),
        region: region(vin),
        country: country(vin),
        manufacturer: manufacturer(vin),
        manufacturer_code: manufacturer_code(vin),
        small_manufacturer: is_small_manufacturer(vin),
        model_year: model_year(vin, reference),
        plant_code: vin.plant_code(),
        serial_number: serial_number(vin).to_owned(),
    }
}

fn or_unknown<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "unknown".to_owned(), |v| v.to_string())
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VIN:           {}", self.vin)?;
        writeln!(
            f,
            "Sections:      {} {} {}",
            self.vin.wmi(),
            self.vin.vds(),
            self.vin.vis()
        )?;
        writeln!(f, "Region:        {}", or_unknown(self.region))?;
        writeln!(f, "Country:       {}", or_unknown(self.country))?;
        writeln!(f, "Manufacturer:  {}", or_unknown(self.manufacturer))?;
        if self.small_manufacturer {
            writeln!(
                f,
                "Maker code:    {} (small-volume)",
                self.manufacturer_code
            )?;
        }
        writeln!(f, "Model year:    {}", or_unknown(self.model_year))?;
        writeln!(f, "Plant:         {}", self.plant_code)?;
        write!(f, "Serial:        {}", self.serial_number)
    }
}
