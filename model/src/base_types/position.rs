use std::fmt;

use super::Meter;

// WGS84 ellipsoid and transverse-Mercator constants
const SEMI_MAJOR_AXIS: f64 = 6378137.0;
const FLATTENING: f64 = 1.0 / 298.257223563;
const SCALE_FACTOR: f64 = 0.9996;
const FALSE_EASTING: f64 = 500000.0;
const FALSE_NORTHING_SOUTH: f64 = 10000000.0;
const EARTH_RADIUS: f64 = 6371000.0; // mean radius for great-circle legs

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct UtmZone {
    pub number: u8,
    pub northern: bool,
}

impl UtmZone {
    pub fn new(number: u8, northern: bool) -> UtmZone {
        assert!(
            (1..=60).contains(&number),
            "UTM zone number out of range: {}",
            number
        );
        UtmZone { number, northern }
    }

    /// central meridian of the zone in degrees
    pub fn central_meridian(&self) -> f64 {
        self.number as f64 * 6.0 - 183.0
    }
}

/// A planar site coordinate (UTM-like easting/northing plus zone). Elements
/// and entry points carry these; transit legs unproject them to latitude /
/// longitude and measure straight-line great-circle distance.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Position {
    easting: Meter,
    northing: Meter,
    zone: UtmZone,
}

// static functions:
impl Position {
    pub fn new(easting: Meter, northing: Meter, zone: UtmZone) -> Position {
        Position {
            easting,
            northing,
            zone,
        }
    }
}

// methods:
impl Position {
    pub fn easting(&self) -> Meter {
        self.easting
    }

    pub fn northing(&self) -> Meter {
        self.northing
    }

    pub fn zone(&self) -> UtmZone {
        self.zone
    }

    /// unproject to (latitude, longitude) in degrees (inverse transverse
    /// Mercator, Snyder series)
    pub fn to_wgs84(&self) -> (f64, f64) {
        let e2 = FLATTENING * (2.0 - FLATTENING);
        let ep2 = e2 / (1.0 - e2);
        let x = self.easting - FALSE_EASTING;
        let y = if self.zone.northern {
            self.northing
        } else {
            self.northing - FALSE_NORTHING_SOUTH
        };

        let m = y / SCALE_FACTOR;
        let mu = m
            / (SEMI_MAJOR_AXIS
                * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0));

        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let sin_phi1 = phi1.sin();
        let cos_phi1 = phi1.cos();
        let tan_phi1 = phi1.tan();

        let c1 = ep2 * cos_phi1 * cos_phi1;
        let t1 = tan_phi1 * tan_phi1;
        let n1 = SEMI_MAJOR_AXIS / (1.0 - e2 * sin_phi1 * sin_phi1).sqrt();
        let r1 = SEMI_MAJOR_AXIS * (1.0 - e2) / (1.0 - e2 * sin_phi1 * sin_phi1).powf(1.5);
        let d = x / (n1 * SCALE_FACTOR);

        let lat = phi1
            - (n1 * tan_phi1 / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);
        let lon = self.zone.central_meridian().to_radians()
            + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
                + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                    * d.powi(5)
                    / 120.0)
                / cos_phi1;

        (lat.to_degrees(), lon.to_degrees())
    }

    /// straight-line great-circle distance in meters (no routing)
    pub fn distance_to(&self, other: &Position) -> Meter {
        let (lat1, lon1) = self.to_wgs84();
        let (lat2, lon2) = other.to_wgs84();
        great_circle_distance(lat1, lon1, lat2, lon2)
    }
}

/// haversine distance between two (latitude, longitude) pairs in degrees
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Meter {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS * a.sqrt().asin()
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:.0}E, {:.0}N, zone {}{})",
            self.easting,
            self.northing,
            self.zone.number,
            if self.zone.northern { "N" } else { "S" }
        )
    }
}
