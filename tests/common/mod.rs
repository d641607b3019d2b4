//! Shared fixtures: an `AppState` wired to a mock server and a recording delivery target.
#![allow(dead_code)]
use async_trait::async_trait;
use catalog_courier_bot::AppState;
use catalog_courier_bot::archive::StagedArchive;
use catalog_courier_bot::config::{Config, Endpoints};
use catalog_courier_bot::delivery::{ArchiveCard, DeliveryTarget};
use catalog_courier_bot::error::GetError;
use httpmock::MockServer;
use std::path::Path;
use std::sync::Mutex;

pub const MIB: usize = 1024 * 1024;

pub fn endpoints_for(server: &MockServer) -> Endpoints {
    Endpoints {
        primary_archive: server.url("/primary/{appid}.zip"),
        secondary_archive: server.url("/secondary/{appid}.zip"),
        catalog_search: server.url("/actions/SearchApps"),
        catalog_details: server.url("/api/appdetails"),
        file_host: server.url("/user/api.php"),
        header_image: server.url("/apps/{appid}/header.jpg"),
    }
}

pub fn state_with(endpoints: Endpoints, staging: &Path) -> AppState {
    let config = Config {
        discord_token: "test-token".to_string(),
        port: 0,
        prefix: "!".to_string(),
        server_id: None,
        staging_dir: staging.to_path_buf(),
        endpoints,
    };
    AppState::new(config).expect("client builds")
}

pub fn state_for(server: &MockServer, staging: &Path) -> AppState {
    state_with(endpoints_for(server), staging)
}

/// Number of files left in the staging directory (0 if it was never created).
pub fn staged_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

/// Records what the workflow asked the chat side to do.
#[derive(Default)]
pub struct Recorder {
    pub events: Mutex<Vec<String>>,
    pub cards: Mutex<Vec<ArchiveCard>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_card(&self) -> Option<ArchiveCard> {
        self.cards.lock().unwrap().last().cloned()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl DeliveryTarget for Recorder {
    async fn progress(&self, text: &str) {
        self.push(format!("progress:{text}"));
    }

    async fn attach(&self, card: &ArchiveCard, archive: &StagedArchive) -> Result<(), GetError> {
        assert!(archive.path().exists(), "archive must still be staged while attaching");
        self.push(format!("attach:{}", archive.attachment_name()));
        self.cards.lock().unwrap().push(card.clone());
        Ok(())
    }

    async fn link(&self, card: &ArchiveCard) -> Result<(), GetError> {
        self.push(format!("link:{}", card.link.clone().unwrap_or_default()));
        self.cards.lock().unwrap().push(card.clone());
        Ok(())
    }

    async fn fail(&self, error: &GetError) {
        self.push(format!("fail:{}", error.user_message()));
    }
}
