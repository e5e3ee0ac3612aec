pub mod meme_generator;
