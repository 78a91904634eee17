//! List of the user's boards

use tracing::info;

use crate::locator::{xpath_literal, Locator};
use crate::pom::Component;
use crate::session::{Element, Session};
use crate::Result;

pub const CONTAINER: Locator = Locator::xpath_static("//div[contains(@class, \"boards-list\")]");
/// Every board card, whatever its title
pub const BOARD_CARD: Locator =
    Locator::xpath_static("//div[contains(@class, \"boards-list\")]//a[contains(@class, \"board-card\")]");

/// Card of the board titled `title`
pub fn board_card(title: &str) -> Locator {
    Locator::xpath(format!(
        "//div[contains(@class, \"boards-list\")]//a[contains(@class, \"board-card\") and normalize-space(.)={}]",
        xpath_literal(title)
    ))
}

#[derive(Debug, Clone)]
pub struct BoardsList {
    session: Session,
}

impl BoardsList {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Card of the board titled `title`; `Error::Timeout` when there is none
    pub async fn board(&self, title: &str) -> Result<Element> {
        self.session
            .wait_for(&board_card(title), self.session.timeouts().element())
            .await
    }

    pub async fn has_board(&self, title: &str) -> Result<bool> {
        self.session
            .is_present(&board_card(title), self.session.timeouts().check())
            .await
    }

    pub async fn open_board(&self, title: &str) -> Result<()> {
        info!("Opening board {:?}", title);
        self.board(title).await?.click().await
    }

    /// Titles of all boards currently listed
    pub async fn board_titles(&self) -> Result<Vec<String>> {
        self.wait_for_container().await?;
        let mut titles = Vec::new();
        for card in self.session.find_all(&BOARD_CARD).await? {
            titles.push(card.text().await?);
        }
        Ok(titles)
    }
}

impl Component for BoardsList {
    const NAME: &'static str = "BoardsList";

    fn session(&self) -> &Session {
        &self.session
    }

    fn container(&self) -> Option<Locator> {
        Some(CONTAINER)
    }
}
