use crate::app::App;
use crate::errors::Result;
use crate::errors::UserError;

impl App {
    #[tracing::instrument(skip_all, fields(game = %game))]
    pub fn suggest_name(&self, game: &str) -> Result<()> {
        if game.trim().is_empty() {
            return Err(UserError::GameRequired.into());
        }

        println!("{}", self.suggester.suggest(game));
        Ok(())
    }
}
