pub mod html;
pub mod text;

#[cfg(test)]
mod tests;
