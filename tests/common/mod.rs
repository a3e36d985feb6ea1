//! Common test utilities for datafun integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary working directory for one test
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Loopback HTTP server serving canned responses by path
pub struct TestServer {
    server: mockito::ServerGuard,
    mocks: Vec<mockito::Mock>,
}

impl TestServer {
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        routes.iter().fold(
            Self {
                server: mockito::Server::new(),
                mocks: Vec::new(),
            },
            |server, &(path, status, body)| server.with_bytes(path, status, body.as_bytes()),
        )
    }

    /// Serve `body` unchanged at `path`
    pub fn with_bytes(mut self, path: &str, status: u16, body: &[u8]) -> Self {
        let mock = self
            .server
            .mock("GET", path)
            .with_status(usize::from(status))
            .with_body(body)
            .create();
        self.mocks.push(mock);
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.url(), path)
    }
}
