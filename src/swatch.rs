/// A single distinct color in a palette, along with how many sampled pixels had exactly that color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    red: u8,
    green: u8,
    blue: u8,
    population: u32,
}

impl Swatch {
    pub fn new((red, green, blue): (u8, u8, u8), population: u32) -> Swatch {
        Self {
            red,
            green,
            blue,
            population,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// The color as a `#rrggbb` string.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    pub fn population(self) -> u32 {
        self.population
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_channel_order() {
        // the fields are declared in a different order than the tuple, make sure they don't get crossed
        let swatch = Swatch::new((1, 2, 3), 7);
        assert_eq!(swatch.rgb(), (1, 2, 3));
        assert_eq!(swatch.population(), 7);
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(Swatch::new((255, 8, 171), 1).hex(), "#ff08ab");
    }
}
