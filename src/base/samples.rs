use super::{Axis, Schematization, Zone};
use super::{GEO_PARAMETERS, IBOUND_PARAMETERS, RECHARGE_PARAMETERS, WELL_PARAMETERS};

/// Holds samples of schematizations
pub struct Samples {}

impl Samples {
    /// Returns a schematization with two adjacent radial zones
    ///
    /// ```text
    /// A: rmin = 0, rmax = 1, ncols = 4
    /// B: rmin = 1, rmax = 5, ncols = 2
    /// column: top = 0, bot = -10 (single layer)
    /// ```
    ///
    /// The merged radial boundaries are `[0, 0.25, 0.5, 0.75, 1, 3, 5]`.
    pub fn two_radial_zones() -> Schematization {
        let mut a = Zone::new();
        a.set_radial(0.0, 1.0).unwrap().set_count(Axis::Radial, 4).unwrap();
        let mut b = Zone::new();
        b.set_radial(1.0, 5.0).unwrap().set_count(Axis::Radial, 2).unwrap();
        let mut column = Zone::new();
        column.set_vertical(0.0, -10.0).unwrap();
        let mut sch = Schematization::new();
        sch.add(GEO_PARAMETERS, "A", a)
            .unwrap()
            .add(GEO_PARAMETERS, "B", b)
            .unwrap()
            .add(GEO_PARAMETERS, "column", column)
            .unwrap();
        sch.add_category(RECHARGE_PARAMETERS)
            .add_category(IBOUND_PARAMETERS)
            .add_category(WELL_PARAMETERS);
        sch
    }

    /// Returns a coarse background zone overridden by a finer zone near the well
    ///
    /// ```text
    /// A: rmin = 0, rmax = 10, top = 0, bot = -10, ncols = 10, hk = 10
    /// B: rmin = 0, rmax = 1, ncols = 2, hk = 1000 (whole depth)
    /// ```
    pub fn override_zones() -> Schematization {
        let mut a = Zone::new();
        a.set_radial(0.0, 10.0)
            .unwrap()
            .set_vertical(0.0, -10.0)
            .unwrap()
            .set_count(Axis::Radial, 10)
            .unwrap()
            .set_param("hk", 10.0)
            .unwrap();
        let mut b = Zone::new();
        b.set_radial(0.0, 1.0)
            .unwrap()
            .set_count(Axis::Radial, 2)
            .unwrap()
            .set_param("hk", 1000.0)
            .unwrap();
        let mut sch = Schematization::new();
        sch.add(GEO_PARAMETERS, "A", a).unwrap().add(GEO_PARAMETERS, "B", b).unwrap();
        sch.add_category(RECHARGE_PARAMETERS)
            .add_category(IBOUND_PARAMETERS)
            .add_category(WELL_PARAMETERS);
        sch
    }

    /// Returns a phreatic aquifer system around a pumping well
    ///
    /// ```text
    ///  r=0    1                                        100
    ///   +-----+------------------------------------------+  z=1
    ///   |                  vadose (excluded)             |
    ///   +-----+------------------------------------------+  z=0
    ///   |     |     shallow aquifer (5 layers)           |
    ///   +-----+------------------------------------------+  z=-5
    ///   |     |                                          |
    ///   |well |     target aquifer (3 layers)            |
    ///   |     |                                          |
    ///   +-----+------------------------------------------+  z=-20
    /// ```
    ///
    /// * Radial: 4 columns in [0, 1] plus 11 columns in [1, 100] (15 columns)
    /// * Vertical: 0, -1, -2, -3, -4, -5, -10, -15, -20 (8 layers)
    /// * The well screen spans [-20, -10] with rmax = 0.25 and Q = -100
    /// * The outer ring [91, 100] has a constant head of 0
    pub fn phreatic() -> Schematization {
        let mut vadose = Zone::new();
        vadose
            .set_vertical(1.0, 0.0)
            .unwrap()
            .set_radial(0.0, 100.0)
            .unwrap()
            .set_param("vadose", true)
            .unwrap()
            .set_param("porosity", 0.2)
            .unwrap();
        let mut shallow = Zone::new();
        shallow
            .set_vertical(0.0, -5.0)
            .unwrap()
            .set_radial(0.0, 100.0)
            .unwrap()
            .set_count(Axis::Vertical, 5)
            .unwrap()
            .set_param("hk", 1.0)
            .unwrap()
            .set_param("vani", 10.0)
            .unwrap()
            .set_param("porosity", 0.3)
            .unwrap()
            .set_param("redox", "suboxic")
            .unwrap();
        let mut target = Zone::new();
        target
            .set_vertical(-5.0, -20.0)
            .unwrap()
            .set_radial(0.0, 100.0)
            .unwrap()
            .set_count(Axis::Vertical, 3)
            .unwrap()
            .set_param("hk", 10.0)
            .unwrap()
            .set_param("porosity", 0.25)
            .unwrap()
            .set_param("redox", "anoxic")
            .unwrap();
        let mut near_well = Zone::new();
        near_well
            .set_radial(0.0, 1.0)
            .unwrap()
            .set_count(Axis::Radial, 4)
            .unwrap();
        let mut far_field = Zone::new();
        far_field
            .set_radial(1.0, 100.0)
            .unwrap()
            .set_count(Axis::Radial, 11)
            .unwrap();
        let mut recharge = Zone::new();
        recharge
            .set_radial(0.0, 100.0)
            .unwrap()
            .set_param("recharge", 0.001)
            .unwrap();
        let mut outer = Zone::new();
        outer.set_radial(91.0, 100.0).unwrap().set_param("head", 0.0).unwrap();
        let mut well = Zone::new();
        well.set_vertical(-10.0, -20.0)
            .unwrap()
            .set_radial(0.0, 0.25)
            .unwrap()
            .set_param("Q", -100.0)
            .unwrap();
        let mut sch = Schematization::new();
        sch.add(GEO_PARAMETERS, "vadose", vadose)
            .unwrap()
            .add(GEO_PARAMETERS, "shallow_aquifer", shallow)
            .unwrap()
            .add(GEO_PARAMETERS, "target_aquifer", target)
            .unwrap()
            .add(GEO_PARAMETERS, "near_well", near_well)
            .unwrap()
            .add(GEO_PARAMETERS, "far_field", far_field)
            .unwrap()
            .add(RECHARGE_PARAMETERS, "recharge1", recharge)
            .unwrap()
            .add(IBOUND_PARAMETERS, "outer_boundary", outer)
            .unwrap()
            .add(WELL_PARAMETERS, "well1", well)
            .unwrap();
        sch
    }

    /// Returns a three-dimensional block with a well in the middle
    ///
    /// ```text
    /// block: x in [0, 10] (5 cols), y in [0, 6] (3 rows), z in [-4, 0] (2 layers), hk = 5
    /// well: x in [4, 6], y in [2, 4], z in [-4, 0], Q = -10
    /// fixed: x in [0, 2], head = 1
    /// ```
    pub fn three_dim_block() -> Schematization {
        let mut block = Zone::new();
        block
            .set_radial(0.0, 10.0)
            .unwrap()
            .set_transverse(0.0, 6.0)
            .unwrap()
            .set_vertical(0.0, -4.0)
            .unwrap()
            .set_count(Axis::Radial, 5)
            .unwrap()
            .set_count(Axis::Transverse, 3)
            .unwrap()
            .set_count(Axis::Vertical, 2)
            .unwrap()
            .set_param("hk", 5.0)
            .unwrap()
            .set_param("porosity", 0.35)
            .unwrap();
        let mut well = Zone::new();
        well.set_radial(4.0, 6.0)
            .unwrap()
            .set_transverse(2.0, 4.0)
            .unwrap()
            .set_vertical(0.0, -4.0)
            .unwrap()
            .set_param("Q", -10.0)
            .unwrap();
        let mut fixed = Zone::new();
        fixed.set_radial(0.0, 2.0).unwrap().set_param("head", 1.0).unwrap();
        let mut sch = Schematization::new();
        sch.add(GEO_PARAMETERS, "block", block)
            .unwrap()
            .add(IBOUND_PARAMETERS, "fixed", fixed)
            .unwrap()
            .add(WELL_PARAMETERS, "well", well)
            .unwrap();
        sch.add_category(RECHARGE_PARAMETERS);
        sch
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Samples;
    use crate::base::{GEO_PARAMETERS, IBOUND_PARAMETERS, RECHARGE_PARAMETERS, WELL_PARAMETERS};

    #[test]
    fn samples_work() {
        let sch = Samples::two_radial_zones();
        assert_eq!(sch.category(GEO_PARAMETERS).unwrap().len(), 3);
        assert_eq!(sch.category(WELL_PARAMETERS).unwrap().len(), 0);

        let sch = Samples::override_zones();
        assert_eq!(sch.category(GEO_PARAMETERS).unwrap().len(), 2);

        let sch = Samples::phreatic();
        assert_eq!(sch.category(GEO_PARAMETERS).unwrap().len(), 5);
        assert_eq!(sch.zones(&[GEO_PARAMETERS]).unwrap().len(), 4); // no vadose
        assert_eq!(sch.category(RECHARGE_PARAMETERS).unwrap().len(), 1);
        assert_eq!(sch.category(IBOUND_PARAMETERS).unwrap().len(), 1);
        assert_eq!(sch.category(WELL_PARAMETERS).unwrap().len(), 1);

        let sch = Samples::three_dim_block();
        assert_eq!(sch.category_names().len(), 4);
    }
}
