// 16進カラー

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, LadderResult};

/// "#rgb" / "#rrggbb" / "#rrggbbaa" 形式の色
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl HexColor {
    /// 梯子本体の色 (#ddd)
    pub const GRID: HexColor = HexColor::rgb(0xdd, 0xdd, 0xdd);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 0xRRGGBB から作成（上位ビットは無視）
    pub const fn from_u32(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    pub fn parse(input: &str) -> LadderResult<Self> {
        let invalid = || LadderError::InvalidColor {
            input: input.to_string(),
        };
        let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| byte(&hex[i..i + 1].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            8 => Ok(Self::rgba(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for HexColor {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = LadderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_form() {
        assert_eq!(HexColor::parse("#ddd").unwrap(), HexColor::GRID);
    }

    #[test]
    fn parses_long_form_and_alpha() {
        assert_eq!(HexColor::parse("#0a0b0c").unwrap(), HexColor::rgb(10, 11, 12));
        assert_eq!(
            HexColor::parse("#ffffffcc").unwrap(),
            HexColor::rgba(255, 255, 255, 0xcc)
        );
    }

    #[test]
    fn rejects_malformed() {
        assert!(HexColor::parse("ddd").is_err());
        assert!(HexColor::parse("#dd").is_err());
        assert!(HexColor::parse("#gggggg").is_err());
        assert!(HexColor::parse("#ééé").is_err());
    }

    #[test]
    fn from_u32_keeps_low_bytes() {
        assert_eq!(HexColor::from_u32(0x12ab34).to_hex(), "#12ab34");
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&HexColor::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HexColor::rgb(1, 2, 3));
    }
}
