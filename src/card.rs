use rand::seq::SliceRandom;

use crate::error::AppError;

/// Run configuration shared by the generator and the renderer.
#[derive(Debug, Clone)]
pub struct BingoConfig {
    pub title: String,
    pub rows: u32,
    pub cols: u32,
    pub cards: u32,
    pub free_space: bool,
    pub free_text: String,
}

/// One generated bingo card: a rows×cols matrix of display strings with
/// the free-space label already substituted where applicable.
#[derive(Debug, Clone)]
pub struct Card {
    /// 1-based ordinal for the "Card #N of M" footer.
    pub number: u32,
    /// Row-major cell contents, `cells[row][col]`.
    pub cells: Vec<Vec<String>>,
    /// Center cell coordinate when the free space is enabled, for the
    /// renderer to highlight.
    pub free_cell: Option<(usize, usize)>,
}

impl BingoConfig {
    /// Number of pool items consumed per card. Widened before the
    /// multiply: rows and cols come straight from the CLI and their
    /// product can exceed u32.
    pub fn required_cells(&self) -> usize {
        let total = self.rows as usize * self.cols as usize;
        if self.free_space {
            total - 1
        } else {
            total
        }
    }

    fn center(&self) -> (usize, usize) {
        ((self.rows / 2) as usize, (self.cols / 2) as usize)
    }
}

/// Check every precondition before any card is built, so that a bad run
/// never produces output.
fn validate(pool_size: usize, config: &BingoConfig) -> Result<(), AppError> {
    if config.cards < 1 {
        return Err(AppError::InvalidCardCount(config.cards));
    }
    if config.rows < 1 || config.cols < 1 {
        return Err(AppError::InvalidGrid(format!(
            "rows and columns must be at least 1 (got {}x{})",
            config.rows, config.cols
        )));
    }
    if config.free_space && (config.rows % 2 == 0 || config.cols % 2 == 0) {
        return Err(AppError::InvalidGrid(format!(
            "free space needs an odd number of rows and columns (got {}x{})",
            config.rows, config.cols
        )));
    }
    let required = config.required_cells();
    if pool_size < required {
        return Err(AppError::InsufficientItems {
            required,
            available: pool_size,
        });
    }
    Ok(())
}

/// Generate `config.cards` cards, each from a fresh uniform shuffle of the
/// full pool. Within a card no pool position is used twice; across cards
/// every shuffle is independent, so two cards may overlap or even coincide
/// when the pool is barely large enough.
pub fn generate_cards(pool: &[String], config: &BingoConfig) -> Result<Vec<Card>, AppError> {
    validate(pool.len(), config)?;

    let mut rng = rand::thread_rng();
    let cards = (1..=config.cards)
        .map(|number| build_card(pool, config, number, &mut rng))
        .collect();
    Ok(cards)
}

fn build_card(
    pool: &[String],
    config: &BingoConfig,
    number: u32,
    rng: &mut impl rand::Rng,
) -> Card {
    let mut shuffled: Vec<&String> = pool.iter().collect();
    shuffled.shuffle(rng);
    let mut fill = shuffled.into_iter().take(config.required_cells());

    let center = config.center();
    let free_cell = config.free_space.then_some(center);

    let cells = (0..config.rows as usize)
        .map(|r| {
            (0..config.cols as usize)
                .map(|c| {
                    if free_cell == Some((r, c)) {
                        config.free_text.clone()
                    } else {
                        // validate() guarantees the fill covers every
                        // non-free cell.
                        fill.next().cloned().unwrap_or_default()
                    }
                })
                .collect()
        })
        .collect();

    Card {
        number,
        cells,
        free_cell,
    }
}
