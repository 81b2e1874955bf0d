//! Declarative description of the rendered solar system.
//!
//! The catalog is pure data: body sizes, orbital parameters, texture hints
//! and the figures shown on each body's info panel. The planet cycle the
//! dispatcher drives runs over this list, skipping the central star.

use serde::{Deserialize, Serialize};

/// Procedural texture family used when drawing a body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureKind {
    #[default]
    Basic,
    Striped,
    Ringed,
    Earth,
    Moon,
    Image,
}

/// Reference figures shown on a body's info panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetStats {
    pub diameter: String,
    pub temperature: String,
    pub day_length: String,
    pub orbit_period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moons: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,
}

/// One body in the scene graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub name: String,
    pub color: String,
    pub radius: f32,
    /// Distance from the star, or from the parent body for moons.
    pub distance: f32,
    /// Orbital angular speed.
    pub speed: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_speed: Option<f32>,
    pub texture: TextureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_texture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_color: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moons: Vec<PlanetConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PlanetStats>,
}

/// Ordered body list. Index 0 is the central star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSystem {
    bodies: Vec<PlanetConfig>,
}

impl SolarSystem {
    pub fn new(bodies: Vec<PlanetConfig>) -> Self {
        Self { bodies }
    }

    /// The stock catalog: the Sun, the eight planets and Earth's moon.
    pub fn standard() -> Self {
        Self::new(standard_bodies())
    }

    pub fn bodies(&self) -> &[PlanetConfig] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&PlanetConfig> {
        self.bodies.get(index)
    }

    /// Indices the planet cycle runs over. The star at index 0 stays out.
    pub fn orbiting_indices(&self) -> Vec<usize> {
        (1..self.bodies.len()).collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

const EARTH_TEXTURE_URL: &str =
    "https://raw.githubusercontent.com/mrdoob/three.js/master/examples/textures/planets/earth_atmos_2048.jpg";
const EARTH_CLOUDS_URL: &str =
    "https://raw.githubusercontent.com/mrdoob/three.js/master/examples/textures/planets/earth_clouds_1024.png";
const MOON_TEXTURE_URL: &str =
    "https://raw.githubusercontent.com/mrdoob/three.js/master/examples/textures/planets/moon_1024.jpg";

fn standard_bodies() -> Vec<PlanetConfig> {
    vec![
        PlanetConfig {
            name: "SUN".into(),
            color: "#ffaa00".into(),
            radius: 5.0,
            distance: 0.0,
            speed: 0.0,
            texture: TextureKind::Basic,
            description: "The Star at the Center".into(),
            stats: Some(PlanetStats {
                diameter: "1,392,700 km".into(),
                temperature: "5,500°C (surface)".into(),
                day_length: "27 Earth days".into(),
                orbit_period: "N/A".into(),
                mass: Some("1.989 × 10³⁰ kg".into()),
                gravity: Some("274 m/s²".into()),
                moons: Some("0".into()),
                fun_fact: Some(
                    "The Sun contains 99.86% of the mass in our Solar System and could fit \
                     1.3 million Earths inside it!"
                        .into(),
                ),
            }),
            ..PlanetConfig::default()
        },
        PlanetConfig {
            name: "MERCURY".into(),
            color: "#8C7853".into(),
            radius: 0.6,
            distance: 8.0,
            speed: 0.8,
            texture: TextureKind::Basic,
            description: "The Swift Messenger".into(),
            stats: Some(PlanetStats {
                diameter: "4,879 km".into(),
                temperature: "-173°C to 427°C".into(),
                day_length: "59 Earth days".into(),
                orbit_period: "88 days".into(),
                mass: Some("3.285 × 10²³ kg".into()),
                gravity: Some("3.7 m/s²".into()),
                moons: Some("0".into()),
                fun_fact: Some(
                    "Mercury has the most extreme temperature variations in the solar system - \
                     over 600°C between day and night!"
                        .into(),
                ),
            }),
            ..PlanetConfig::default()
        },
        PlanetConfig {
            name: "VENUS".into(),
            color: "#FFC649".into(),
            radius: 0.9,
            distance: 12.0,
            speed: 0.6,
            texture: TextureKind::Basic,
            description: "The Morning Star".into(),
            stats: Some(PlanetStats {
                diameter: "12,104 km".into(),
                temperature: "464°C (hottest planet)".into(),
                day_length: "243 Earth days".into(),
                orbit_period: "225 days".into(),
                mass: Some("4.867 × 10²⁴ kg".into()),
                gravity: Some("8.87 m/s²".into()),
                moons: Some("0".into()),
                fun_fact: Some(
                    "Venus rotates backwards and has a day longer than its year! Its thick \
                     atmosphere creates a runaway greenhouse effect."
                        .into(),
                ),
            }),
            ..PlanetConfig::default()
        },
        PlanetConfig {
            name: "EARTH".into(),
            color: "#4b9cd3".into(),
            radius: 1.0,
            distance: 17.0,
            speed: 0.5,
            texture: TextureKind::Earth,
            texture_url: Some(EARTH_TEXTURE_URL.into()),
            cloud_texture_url: Some(EARTH_CLOUDS_URL.into()),
            description: "Our Blue Marble".into(),
            moons: vec![PlanetConfig {
                name: "MOON".into(),
                color: "#DDDDDD".into(),
                radius: 0.27,
                distance: 2.0,
                speed: 2.0,
                texture: TextureKind::Moon,
                texture_url: Some(MOON_TEXTURE_URL.into()),
                description: "Luna - Our Natural Satellite".into(),
                ..PlanetConfig::default()
            }],
            stats: Some(PlanetStats {
                diameter: "12,742 km".into(),
                temperature: "15°C (average)".into(),
                day_length: "24 hours".into(),
                orbit_period: "365.25 days".into(),
                mass: Some("5.972 × 10²⁴ kg".into()),
                gravity: Some("9.81 m/s²".into()),
                moons: Some("1 (Luna)".into()),
                fun_fact: Some(
                    "Earth is the only known planet with liquid water on its surface and the \
                     only place in the universe where life is known to exist!"
                        .into(),
                ),
            }),
            ..PlanetConfig::default()
        },
        PlanetConfig {
            name: "MARS".into(),
            color: "#CD5C5C".into(),
            radius: 0.7,
            distance: 23.0,
            speed: 0.4,
            texture: TextureKind::Basic,
            description: "The Red Planet".into(),
            stats: Some(PlanetStats {
                diameter: "6,779 km".into(),
                temperature: "-65°C (avg), -125°C to 20°C".into(),
                day_length: "24h 37m".into(),
                orbit_period: "687 days".into(),
                mass: Some("6.39 × 10²³ kg".into()),
                gravity: Some("3.71 m/s²".into()),
                moons: Some("2 (Phobos & Deimos)".into()),
                fun_fact: Some(
                    "Mars has the largest volcano in our solar system - Olympus Mons, which is \
                     3x taller than Mount Everest!"
                        .into(),
                ),
            }),
            ..PlanetConfig::default()
        },
        PlanetConfig {
            name: "JUPITER".into(),
            color: "#C88B3A".into(),
            radius: 3.5,
            distance: 34.0,
            speed: 0.2,
            texture: TextureKind::Striped,
            description: "King of Planets".into(),
            stats: Some(PlanetStats {
                diameter: "139,820 km".into(),
                temperature: "-110°C (cloud tops)".into(),
                day_length: "9h 56m (fastest)".into(),
                orbit_period: "12 years".into(),
                mass: Some("1.898 × 10²⁷ kg".into()),
                gravity: Some("24.79 m/s²".into()),
                moons: Some("95+ known moons".into()),
                fun_fact: Some(
                    "Jupiter's Great Red Spot is a storm that has been raging for over 400 \
                     years and is larger than Earth!"
                        .into(),
                ),
            }),
            ..PlanetConfig::default()
        },
        PlanetConfig {
            name: "SATURN".into(),
            color: "#FAD5A5".into(),
            radius: 3.0,
            distance: 48.0,
            speed: 0.15,
            texture: TextureKind::Ringed,
            ring_color: Some("#E5C29F".into()),
            description: "Lord of the Rings".into(),
            stats: Some(PlanetStats {
                diameter: "116,460 km".into(),
                temperature: "-140°C (cloud tops)".into(),
                day_length: "10h 42m".into(),
                orbit_period: "29.5 years".into(),
                mass: Some("5.683 × 10²⁶ kg".into()),
                gravity: Some("10.44 m/s²".into()),
                moons: Some("146+ known moons".into()),
                fun_fact: Some(
                    "Saturn's rings are made of billions of ice particles and are so wide they \
                     could fit 6 Earths across, but only 10m thick!"
                        .into(),
                ),
            }),
            ..PlanetConfig::default()
        },
        PlanetConfig {
            name: "URANUS".into(),
            color: "#4FD0E7".into(),
            radius: 2.0,
            distance: 60.0,
            speed: 0.1,
            texture: TextureKind::Basic,
            description: "The Sideways Planet".into(),
            stats: Some(PlanetStats {
                diameter: "50,724 km".into(),
                temperature: "-195°C (coldest atmosphere)".into(),
                day_length: "17h 14m".into(),
                orbit_period: "84 years".into(),
                mass: Some("8.681 × 10²⁵ kg".into()),
                gravity: Some("8.69 m/s²".into()),
                moons: Some("28 known moons".into()),
                fun_fact: Some(
                    "Uranus rotates on its side at a 98° angle! It appears to roll like a ball \
                     as it orbits the Sun."
                        .into(),
                ),
            }),
            ..PlanetConfig::default()
        },
        PlanetConfig {
            name: "NEPTUNE".into(),
            color: "#4169E1".into(),
            radius: 1.9,
            distance: 72.0,
            speed: 0.08,
            texture: TextureKind::Basic,
            description: "The Windiest Planet".into(),
            stats: Some(PlanetStats {
                diameter: "49,244 km".into(),
                temperature: "-200°C (coldest planet)".into(),
                day_length: "16h 6m".into(),
                orbit_period: "165 years".into(),
                mass: Some("1.024 × 10²⁶ kg".into()),
                gravity: Some("11.15 m/s²".into()),
                moons: Some("16 known moons".into()),
                fun_fact: Some(
                    "Neptune has the fastest winds in the solar system, reaching speeds of up \
                     to 2,100 km/h - supersonic speeds!"
                        .into(),
                ),
            }),
            ..PlanetConfig::default()
        },
    ]
}
