pub mod video_verifications;
