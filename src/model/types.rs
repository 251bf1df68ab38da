use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type Point = Point3<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardResidue {
    ALA,
    ARG,
    ASN,
    ASP,
    CYS,
    GLN,
    GLU,
    GLY,
    HIS,
    ILE,
    LEU,
    LYS,
    MET,
    PHE,
    PRO,
    SER,
    THR,
    TRP,
    TYR,
    VAL,
}

/// Per-residue secondary-structure class.
///
/// Variants are declared in builder precedence order: when several bond classes touch the
/// same residue, the one declared later wins. `Ord` follows that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum SecondaryStructure {
    #[default]
    #[serde(rename = "C")]
    Coil,
    #[serde(rename = "T")]
    Turn,
    #[serde(rename = "H")]
    AlphaHelix,
    #[serde(rename = "G")]
    ThreeTenHelix,
    #[serde(rename = "I")]
    PiHelix,
    #[serde(rename = "B")]
    ParallelStrand,
    #[serde(rename = "b")]
    AntiparallelStrand,
}

impl StandardResidue {
    pub fn one_letter_code(&self) -> char {
        match self {
            StandardResidue::ALA => 'A',
            StandardResidue::ARG => 'R',
            StandardResidue::ASN => 'N',
            StandardResidue::ASP => 'D',
            StandardResidue::CYS => 'C',
            StandardResidue::GLN => 'Q',
            StandardResidue::GLU => 'E',
            StandardResidue::GLY => 'G',
            StandardResidue::HIS => 'H',
            StandardResidue::ILE => 'I',
            StandardResidue::LEU => 'L',
            StandardResidue::LYS => 'K',
            StandardResidue::MET => 'M',
            StandardResidue::PHE => 'F',
            StandardResidue::PRO => 'P',
            StandardResidue::SER => 'S',
            StandardResidue::THR => 'T',
            StandardResidue::TRP => 'W',
            StandardResidue::TYR => 'Y',
            StandardResidue::VAL => 'V',
        }
    }

    /// Proline's backbone nitrogen carries no amide hydrogen.
    pub fn has_amide_hydrogen(&self) -> bool {
        *self != StandardResidue::PRO
    }
}

impl SecondaryStructure {
    pub const ALL: [SecondaryStructure; 7] = [
        SecondaryStructure::Coil,
        SecondaryStructure::Turn,
        SecondaryStructure::AlphaHelix,
        SecondaryStructure::ThreeTenHelix,
        SecondaryStructure::PiHelix,
        SecondaryStructure::ParallelStrand,
        SecondaryStructure::AntiparallelStrand,
    ];

    pub fn code(&self) -> char {
        match self {
            SecondaryStructure::Coil => 'C',
            SecondaryStructure::Turn => 'T',
            SecondaryStructure::AlphaHelix => 'H',
            SecondaryStructure::ThreeTenHelix => 'G',
            SecondaryStructure::PiHelix => 'I',
            SecondaryStructure::ParallelStrand => 'B',
            SecondaryStructure::AntiparallelStrand => 'b',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SecondaryStructure::Coil => "random coil",
            SecondaryStructure::Turn => "turn",
            SecondaryStructure::AlphaHelix => "alpha helix",
            SecondaryStructure::ThreeTenHelix => "3,10 helix",
            SecondaryStructure::PiHelix => "pi helix",
            SecondaryStructure::ParallelStrand => "sense beta sheet",
            SecondaryStructure::AntiparallelStrand => "anti-sense beta sheet",
        }
    }

    pub fn is_helix(&self) -> bool {
        matches!(
            self,
            SecondaryStructure::AlphaHelix
                | SecondaryStructure::ThreeTenHelix
                | SecondaryStructure::PiHelix
        )
    }

    pub fn is_strand(&self) -> bool {
        matches!(
            self,
            SecondaryStructure::ParallelStrand | SecondaryStructure::AntiparallelStrand
        )
    }
}

impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<char> for SecondaryStructure {
    type Error = String;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        SecondaryStructure::ALL
            .into_iter()
            .find(|ss| ss.code() == code)
            .ok_or_else(|| format!("Invalid secondary structure code: {}", code))
    }
}

impl FromStr for SecondaryStructure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => SecondaryStructure::try_from(code),
            _ => Err(format!("Invalid secondary structure code: {}", s)),
        }
    }
}

impl fmt::Display for StandardResidue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code = match self {
            StandardResidue::ALA => "ALA",
            StandardResidue::ARG => "ARG",
            StandardResidue::ASN => "ASN",
            StandardResidue::ASP => "ASP",
            StandardResidue::CYS => "CYS",
            StandardResidue::GLN => "GLN",
            StandardResidue::GLU => "GLU",
            StandardResidue::GLY => "GLY",
            StandardResidue::HIS => "HIS",
            StandardResidue::ILE => "ILE",
            StandardResidue::LEU => "LEU",
            StandardResidue::LYS => "LYS",
            StandardResidue::MET => "MET",
            StandardResidue::PHE => "PHE",
            StandardResidue::PRO => "PRO",
            StandardResidue::SER => "SER",
            StandardResidue::THR => "THR",
            StandardResidue::TRP => "TRP",
            StandardResidue::TYR => "TYR",
            StandardResidue::VAL => "VAL",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for StandardResidue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALA" => Ok(StandardResidue::ALA),
            "ARG" => Ok(StandardResidue::ARG),
            "ASN" => Ok(StandardResidue::ASN),
            "ASP" => Ok(StandardResidue::ASP),
            "CYS" => Ok(StandardResidue::CYS),
            "GLN" => Ok(StandardResidue::GLN),
            "GLU" => Ok(StandardResidue::GLU),
            "GLY" => Ok(StandardResidue::GLY),
            "HIS" => Ok(StandardResidue::HIS),
            "ILE" => Ok(StandardResidue::ILE),
            "LEU" => Ok(StandardResidue::LEU),
            "LYS" => Ok(StandardResidue::LYS),
            "MET" => Ok(StandardResidue::MET),
            "PHE" => Ok(StandardResidue::PHE),
            "PRO" => Ok(StandardResidue::PRO),
            "SER" => Ok(StandardResidue::SER),
            "THR" => Ok(StandardResidue::THR),
            "TRP" => Ok(StandardResidue::TRP),
            "TYR" => Ok(StandardResidue::TYR),
            "VAL" => Ok(StandardResidue::VAL),
            _ => Err(format!("Invalid standard residue: {}", s)),
        }
    }
}
