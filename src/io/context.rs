use crate::model::types::StandardResidue;
use std::collections::HashMap;
use std::str::FromStr;

/// Residue-name resolution shared by the structure readers.
///
/// Maps force-field protonation variants and common modified amino acids onto their
/// canonical three-letter code so that, e.g., `MSE` is treated as methionine.
#[derive(Debug, Clone)]
pub struct IoContext {
    alias_map: HashMap<String, String>,
}

impl IoContext {
    pub fn new_default() -> Self {
        let mut alias_map = HashMap::new();

        macro_rules! register_alias {
            ($alias:expr, $canonical:expr) => {
                alias_map.insert($alias.to_string(), $canonical.to_string());
            };
        }

        register_alias!("ARN", "ARG");
        register_alias!("ASH", "ASP");
        register_alias!("CYM", "CYS");
        register_alias!("CYX", "CYS");
        register_alias!("GLH", "GLU");
        register_alias!("HID", "HIS");
        register_alias!("HIE", "HIS");
        register_alias!("HIP", "HIS");
        register_alias!("HSD", "HIS");
        register_alias!("HSE", "HIS");
        register_alias!("HSP", "HIS");
        register_alias!("LYN", "LYS");
        register_alias!("TYM", "TYR");

        register_alias!("MSE", "MET");
        register_alias!("FME", "MET");
        register_alias!("SEP", "SER");
        register_alias!("TPO", "THR");
        register_alias!("PTR", "TYR");
        register_alias!("CSO", "CYS");
        register_alias!("CME", "CYS");
        register_alias!("KCX", "LYS");
        register_alias!("MLY", "LYS");
        register_alias!("HYP", "PRO");
        register_alias!("DAL", "ALA");
        register_alias!("AIB", "ALA");

        Self { alias_map }
    }

    /// Resolves a raw residue name to its canonical code and standard identity.
    ///
    /// Names that are neither standard nor registered aliases are returned unchanged with
    /// no standard identity.
    pub fn classify_residue(&self, raw_name: &str) -> (String, Option<StandardResidue>) {
        let upper = raw_name.trim().to_ascii_uppercase();
        let canonical = self.alias_map.get(&upper).cloned().unwrap_or(upper);
        let standard = StandardResidue::from_str(&canonical).ok();
        (canonical, standard)
    }
}

impl Default for IoContext {
    fn default() -> Self {
        Self::new_default()
    }
}
