/// Highest line a `goto` can reach on a standard chip.
pub const JUMP_CEILING: usize = 20;

/// Machine settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub jump_ceiling: usize,
}

impl Config {
    pub fn jump_ceiling(mut self, line: usize) -> Config {
        self.jump_ceiling = line.max(1);
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            jump_ceiling: JUMP_CEILING,
        }
    }
}
