use anyhow::bail;

/// Width of a single bar on the x axis. Bars are centred on their turn,
/// so with a width of 1 neighbouring bars touch.
pub const BAR_WIDTH: f64 = 1.0;

/// One bar of the chart: the first player's cards form the base segment,
/// the second player's cards are stacked on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackedBar {
    pub turn: usize,
    pub first: u32,
    pub second: u32,
}

impl StackedBar {
    pub fn left(&self) -> f64 {
        self.turn as f64 - BAR_WIDTH / 2.0
    }

    pub fn right(&self) -> f64 {
        self.turn as f64 + BAR_WIDTH / 2.0
    }

    /// Bottom and top of the first player's segment.
    pub fn base_segment(&self) -> (u32, u32) {
        (0, self.first)
    }

    /// Bottom and top of the second player's segment.
    pub fn top_segment(&self) -> (u32, u32) {
        (self.first, self.total())
    }

    pub fn total(&self) -> u32 {
        self.first + self.second
    }
}

/// Card counts of both players, one entry per turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnLog {
    first: Vec<u32>,
    second: Vec<u32>,
}

impl TurnLog {
    pub fn new(first: Vec<u32>, second: Vec<u32>) -> anyhow::Result<Self> {
        if first.len() != second.len() {
            bail!(
                "Both players need a count for every turn ({} vs {} entries)",
                first.len(),
                second.len()
            );
        }
        if first.is_empty() {
            bail!("The game log contains no turns");
        }
        // Bars stack both counts, so every sum must fit the count type
        for (turn, (a, b)) in first.iter().zip(second.iter()).enumerate() {
            if a.checked_add(*b).is_none() {
                bail!("Turn {} holds more cards than can be counted ({} + {})", turn, a, b);
            }
        }
        Ok(TurnLog { first, second })
    }

    pub fn turns(&self) -> usize {
        self.first.len()
    }

    pub fn first_player(&self) -> &[u32] {
        &self.first
    }

    pub fn second_player(&self) -> &[u32] {
        &self.second
    }

    pub fn title(&self) -> String {
        format!("War game - {} turns", self.turns())
    }

    pub fn bars(&self) -> Vec<StackedBar> {
        self.first
            .iter()
            .zip(self.second.iter())
            .enumerate()
            .map(|(turn, (&first, &second))| StackedBar {
                turn,
                first,
                second,
            })
            .collect()
    }

    pub fn max_total(&self) -> u32 {
        self.bars().iter().map(StackedBar::total).max().unwrap_or(0)
    }

    /// Returns the number of cards in play if it is the same on every turn.
    /// Cards staked during a war are held by neither player, so a game log
    /// usually dips below the deck size on those turns.
    pub fn constant_total(&self) -> Option<u32> {
        let bars = self.bars();
        let total = bars.first()?.total();
        bars.iter().all(|b| b.total() == total).then_some(total)
    }
}
