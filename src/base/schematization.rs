use super::Zone;
use crate::StrError;
use serde_json::{Map, Value};
use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the zones of one category in the order they were supplied
#[derive(Clone, Debug)]
pub struct Category {
    /// Name of the category (e.g., "geo_parameters")
    pub name: String,

    /// (zone name, zone) pairs; later zones override earlier ones on overlap
    pub zones: Vec<(String, Zone)>,
}

/// Holds the declarative description of the model domain
///
/// The schematization maps category names to zones. Categories and zones keep
/// the order in which they were supplied because painting uses that order:
/// a zone overrides the values of any zone before it.
#[derive(Clone, Debug)]
pub struct Schematization {
    categories: Vec<Category>,
}

impl Schematization {
    /// Allocates a new empty schematization
    pub fn new() -> Self {
        Schematization { categories: Vec::new() }
    }

    /// Adds a zone to a category (creating the category if needed)
    ///
    /// The zone is validated first; zone names must be unique within a category.
    pub fn add(&mut self, category: &str, name: &str, zone: Zone) -> Result<&mut Self, StrError> {
        zone.validate()?;
        let index = match self.categories.iter().position(|c| c.name == category) {
            Some(i) => i,
            None => {
                self.categories.push(Category {
                    name: category.to_string(),
                    zones: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        let zones = &mut self.categories[index].zones;
        if zones.iter().any(|(n, _)| n == name) {
            log::error!("zone '{}' appears twice in category '{}'", name, category);
            return Err("zone names must be unique within a category");
        }
        zones.push((name.to_string(), zone));
        Ok(self)
    }

    /// Adds an empty category (no-op if it exists already)
    pub fn add_category(&mut self, category: &str) -> &mut Self {
        if !self.has_category(category) {
            self.categories.push(Category {
                name: category.to_string(),
                zones: Vec::new(),
            });
        }
        self
    }

    /// Returns the zones of a category
    pub fn category(&self, name: &str) -> Result<&[(String, Zone)], StrError> {
        Ok(&self.find(name)?.zones)
    }

    /// Indicates whether a category exists
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Returns the zones of many categories, in the given order
    ///
    /// Returns `(category name, zone name, zone)` triples.
    /// Vadose zones are not part of the flow model and are left out.
    pub fn zones<'a>(&'a self, categories: &[&str]) -> Result<Vec<(&'a str, &'a str, &'a Zone)>, StrError> {
        let mut all = Vec::new();
        for category in categories {
            let found = self.find(category)?;
            for (name, zone) in &found.zones {
                if zone.is_vadose() {
                    log::debug!("{}/{}: vadose zone is excluded from the flow model", found.name, name);
                    continue;
                }
                all.push((found.name.as_str(), name.as_str(), zone));
            }
        }
        Ok(all)
    }

    /// Returns the names of all categories
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Parses a JSON string such as `{"geo_parameters": {"layer1": {"top": 0, ...}}}`
    pub fn from_json_str(json: &str) -> Result<Self, StrError> {
        let root: Map<String, Value> = serde_json::from_str(json).map_err(|_| "cannot parse JSON schematization")?;
        Schematization::from_map(root)
    }

    /// Reads a JSON file containing the schematization
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let root: Map<String, Value> =
            serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON schematization")?;
        Schematization::from_map(root)
    }

    /// Finds a category by name
    fn find(&self, name: &str) -> Result<&Category, StrError> {
        match self.categories.iter().find(|c| c.name == name) {
            Some(c) => Ok(c),
            None => {
                log::error!("category '{}' is missing from the schematization", name);
                Err("required category is missing from schematization")
            }
        }
    }

    /// Converts the nested JSON maps into categories and validated zones
    fn from_map(root: Map<String, Value>) -> Result<Self, StrError> {
        let mut schematization = Schematization::new();
        for (category, zones) in root {
            let zones = match zones {
                Value::Object(map) => map,
                _ => return Err("category must be a map of zones"),
            };
            schematization.add_category(&category);
            for (name, record) in zones {
                let zone: Zone = serde_json::from_value(record).map_err(|e| {
                    log::error!("{}/{}: {}", category, name, e);
                    "zone attributes must be numbers, booleans, or text"
                })?;
                schematization.add(&category, &name, zone)?;
            }
        }
        Ok(schematization)
    }
}

impl fmt::Display for Schematization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schematization\n").unwrap();
        write!(f, "==============\n").unwrap();
        for category in &self.categories {
            write!(f, "{}\n", category.name).unwrap();
            for (name, zone) in &category.zones {
                let mut keys: Vec<_> = zone.params.keys().collect();
                keys.sort();
                write!(f, "    {} :", name).unwrap();
                for key in keys {
                    write!(f, " {}={}", key, zone.params.get(key).unwrap()).unwrap();
                }
                write!(f, "\n").unwrap();
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Schematization;
    use crate::base::{Zone, GEO_PARAMETERS, WELL_PARAMETERS};
    use crate::StrError;

    #[test]
    fn add_and_category_work() -> Result<(), StrError> {
        let mut sch = Schematization::new();
        let mut a = Zone::new();
        a.set_radial(0.0, 10.0)?.set_param("hk", 10.0)?;
        let mut b = Zone::new();
        b.set_radial(0.0, 1.0)?.set_param("hk", 1000.0)?;
        sch.add(GEO_PARAMETERS, "A", a)?.add(GEO_PARAMETERS, "B", b)?;
        let zones = sch.category(GEO_PARAMETERS)?;
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].0, "A");
        assert_eq!(zones[1].0, "B");
        assert_eq!(sch.has_category(GEO_PARAMETERS), true);
        assert_eq!(sch.has_category(WELL_PARAMETERS), false);
        assert_eq!(
            sch.category(WELL_PARAMETERS).err(),
            Some("required category is missing from schematization")
        );
        assert_eq!(
            sch.add(GEO_PARAMETERS, "A", Zone::new()).err(),
            Some("zone names must be unique within a category")
        );
        assert_eq!(
            format!("{}", sch),
            "Schematization\n\
             ==============\n\
             geo_parameters\n\
             \x20   A : hk=10.0\n\
             \x20   B : hk=1000.0\n"
        );
        Ok(())
    }

    #[test]
    fn zones_skips_vadose() -> Result<(), StrError> {
        let mut sch = Schematization::new();
        let mut vadose = Zone::new();
        vadose.set_vertical(1.0, 0.0)?.set_param("vadose", true)?;
        let mut layer = Zone::new();
        layer.set_vertical(0.0, -10.0)?;
        sch.add(GEO_PARAMETERS, "vadose", vadose)?
            .add(GEO_PARAMETERS, "layer", layer)?;
        let zones = sch.zones(&[GEO_PARAMETERS])?;
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].0, GEO_PARAMETERS);
        assert_eq!(zones[0].1, "layer");
        assert_eq!(
            sch.zones(&[GEO_PARAMETERS, WELL_PARAMETERS]).err(),
            Some("required category is missing from schematization")
        );
        Ok(())
    }

    #[test]
    fn from_json_str_keeps_order() -> Result<(), StrError> {
        let json = r#"{
            "well_parameters": {
                "well1": {"top": -5, "bot": -15, "rmin": 0, "rmax": 0.1, "Q": -100}
            },
            "geo_parameters": {
                "zeta": {"top": 0, "bot": -20, "rmin": 0, "rmax": 50, "hk": 10},
                "alpha": {"top": -5, "bot": -15, "hk": 1, "redox": "anoxic"}
            },
            "ibound_parameters": {}
        }"#;
        let sch = Schematization::from_json_str(json)?;
        assert_eq!(
            sch.category_names(),
            &["well_parameters", "geo_parameters", "ibound_parameters"]
        );
        let geo = sch.category(GEO_PARAMETERS)?;
        assert_eq!(geo[0].0, "zeta");
        assert_eq!(geo[1].0, "alpha");
        assert_eq!(geo[1].1.top, Some(-5.0));
        assert_eq!(geo[1].1.rmin, None);
        assert_eq!(sch.category(WELL_PARAMETERS)?[0].1.number("Q"), Some(-100.0));
        assert_eq!(sch.category("ibound_parameters")?.len(), 0);
        Ok(())
    }

    #[test]
    fn from_json_str_captures_errors() {
        assert_eq!(
            Schematization::from_json_str("[1, 2]").err(),
            Some("cannot parse JSON schematization")
        );
        assert_eq!(
            Schematization::from_json_str(r#"{"geo_parameters": 3}"#).err(),
            Some("category must be a map of zones")
        );
        assert_eq!(
            Schematization::from_json_str(r#"{"geo_parameters": {"a": {"hk": [1, 2]}}}"#).err(),
            Some("zone attributes must be numbers, booleans, or text")
        );
        assert_eq!(
            Schematization::from_json_str(r#"{"geo_parameters": {"a": {"top": -1, "bot": 0}}}"#).err(),
            Some("axis bounds must satisfy max > min")
        );
        assert_eq!(
            Schematization::from_json_str(r#"{"geo_parameters": {"a": {"rmin": 0, "rmax": 1, "ncols": 0}}}"#).err(),
            Some("refinement count must be ≥ 1")
        );
        assert_eq!(Schematization::read_json("/tmp/pmgrid/__missing__.json").err(), Some("cannot open file"));
    }
}
