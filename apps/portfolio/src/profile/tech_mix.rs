//! Tech mix of a project: each tag's share of the total weight and a stable
//! display color per tech name.

use serde::Serialize;

use crate::models::TechWeight;

const PALETTE: [&str; 5] = ["#4f46e5", "#0ea5e9", "#10b981", "#f59e0b", "#a855f7"];

/// One slice of the mix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechShare {
    pub name: String,
    pub weight: f64,
    /// 0.0 to 100.0
    pub percent: f64,
    pub color: &'static str,
}

impl TechShare {
    /// `Azure 75% #0ea5e9`
    pub fn label(&self) -> String {
        format!("{} {:.0}% {}", self.name, self.percent, self.color)
    }
}

/// Shares in input order. Empty when there is nothing to divide.
pub fn tech_shares(tech: &[TechWeight]) -> Vec<TechShare> {
    let total: f64 = tech.iter().map(|t| t.weight).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    tech.iter()
        .map(|t| TechShare {
            name: t.name.clone(),
            weight: t.weight,
            percent: t.weight / total * 100.0,
            color: tech_color_hex(&t.name),
        })
        .collect()
}

fn color_override(key: &str) -> Option<&'static str> {
    let hex = match key {
        "azure" => "#0ea5e9",
        "sql server" | "sql" => "#f59e0b",
        "c#" => "#a855f7",
        ".net" | "net" | "dotnet" => "#4f46e5",
        "react" => "#22c55e",
        "nintex k2" | "k2" => "#10b981",
        _ => return None,
    };
    Some(hex)
}

/// Rolling `hash * 31 + unit` over UTF-16 code units, wrapping at 32 bits.
fn hash_key(key: &str) -> u32 {
    key.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as u32))
}

/// Display color for a tech name. Case and surrounding whitespace do not
/// matter, so "React" and " react " share a color.
pub fn tech_color_hex(name: &str) -> &'static str {
    let key = name.trim().to_lowercase();
    color_override(&key).unwrap_or_else(|| PALETTE[hash_key(&key) as usize % PALETTE.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tw(name: &str, weight: f64) -> TechWeight {
        TechWeight {
            name: name.to_string(),
            weight,
        }
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let shares = tech_shares(&[tw("Azure", 3.0), tw("C#", 1.0)]);
        assert_eq!(shares.len(), 2);
        assert!((shares[0].percent - 75.0).abs() < 1e-9);
        assert!((shares[1].percent - 25.0).abs() < 1e-9);
        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(shares[0].color, "#0ea5e9");
        assert_eq!(shares[1].color, "#a855f7");
    }

    #[test]
    fn test_share_label_carries_color() {
        let shares = tech_shares(&[tw("Azure", 2.0), tw("React", 1.0)]);
        assert_eq!(shares[0].label(), "Azure 67% #0ea5e9");
        assert_eq!(shares[1].label(), "React 33% #22c55e");
    }

    #[test]
    fn test_empty_mix() {
        assert!(tech_shares(&[]).is_empty());
    }

    #[test]
    fn test_overrides_ignore_case_and_padding() {
        assert_eq!(tech_color_hex("React"), "#22c55e");
        assert_eq!(tech_color_hex("  AZURE "), "#0ea5e9");
        assert_eq!(tech_color_hex("SQL Server"), "#f59e0b");
        assert_eq!(tech_color_hex(".NET"), "#4f46e5");
    }

    #[test]
    fn test_hashed_color_is_stable_and_from_palette() {
        let a = tech_color_hex("Kubernetes");
        assert_eq!(a, tech_color_hex("kubernetes"));
        assert!(PALETTE.contains(&a));
    }

    #[test]
    fn test_hash_matches_known_values() {
        assert_eq!(hash_key(""), 0);
        assert_eq!(hash_key("a"), 97);
        // 'g' = 103, 'o' = 111
        assert_eq!(hash_key("go"), 103 * 31 + 111);
        assert_eq!(tech_color_hex("go"), PALETTE[(103 * 31 + 111) % 5]);
    }
}
