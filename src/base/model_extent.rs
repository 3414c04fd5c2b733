use super::Schematization;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the overall dimensions of the model domain
///
/// The dimensions are taken from the geological layers:
///
/// * `top` -- maximum `top` of all zones
/// * `bot` -- minimum `bot` of all zones
/// * `radius` -- maximum `rmax` of all zones (distance from the well to the outer boundary)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelExtent {
    /// Model top
    pub top: f64,

    /// Model bottom
    pub bot: f64,

    /// Vertical extent (top - bot)
    pub thickness: f64,

    /// Horizontal extent
    pub radius: f64,
}

impl ModelExtent {
    /// Computes the model extent from the zones of the given categories
    pub fn new(schematization: &Schematization, categories: &[&str]) -> Result<Self, StrError> {
        let mut top: Option<f64> = None;
        let mut bot: Option<f64> = None;
        let mut radius: Option<f64> = None;
        for (_, _, zone) in schematization.zones(categories)? {
            if let Some(t) = zone.top {
                top = Some(top.map_or(t, |v| f64::max(v, t)));
            }
            if let Some(b) = zone.bot {
                bot = Some(bot.map_or(b, |v| f64::min(v, b)));
            }
            if let Some(r) = zone.rmax {
                radius = Some(radius.map_or(r, |v| f64::max(v, r)));
            }
        }
        let top = top.ok_or("cannot find the model top")?;
        let bot = bot.ok_or("cannot find the model bottom")?;
        let radius = radius.ok_or("cannot find the model radius")?;
        if top <= bot {
            return Err("model top must be above the model bottom");
        }
        Ok(ModelExtent {
            top,
            bot,
            thickness: top - bot,
            radius,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ModelExtent;
    use crate::base::{Samples, Schematization, Zone, GEO_PARAMETERS};
    use crate::StrError;

    #[test]
    fn new_works() -> Result<(), StrError> {
        let sch = Samples::phreatic();
        let extent = ModelExtent::new(&sch, &[GEO_PARAMETERS])?;
        assert_eq!(extent.top, 0.0);
        assert_eq!(extent.bot, -20.0);
        assert_eq!(extent.thickness, 20.0);
        assert_eq!(extent.radius, 100.0);
        Ok(())
    }

    #[test]
    fn new_captures_errors() -> Result<(), StrError> {
        let mut sch = Schematization::new();
        let mut zone = Zone::new();
        zone.set_radial(0.0, 5.0)?;
        sch.add(GEO_PARAMETERS, "radial_only", zone)?;
        assert_eq!(
            ModelExtent::new(&sch, &[GEO_PARAMETERS]).err(),
            Some("cannot find the model top")
        );
        assert_eq!(
            ModelExtent::new(&sch, &["other"]).err(),
            Some("required category is missing from schematization")
        );
        let mut zone = Zone::new();
        zone.top = Some(1.0);
        sch.add(GEO_PARAMETERS, "top_only", zone)?;
        assert_eq!(
            ModelExtent::new(&sch, &[GEO_PARAMETERS]).err(),
            Some("cannot find the model bottom")
        );
        Ok(())
    }
}
