mod manifest;
mod progress;
