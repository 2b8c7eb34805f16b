use gastu_core::preferences::PreferenceEdits;

use crate::cli::PrefsCommand;
use crate::main_lib::AppContext;
use crate::render;

pub async fn run(cmd: PrefsCommand, ctx: &AppContext) -> anyhow::Result<()> {
    match cmd {
        PrefsCommand::Show { tab } => {
            let form = ctx.preference_service.load().await?;
            print!("{}", render::preference_form(&form, tab));
        }
        PrefsCommand::Set { tab, assignments } => {
            let mut edits = PreferenceEdits::new();
            for assignment in &assignments {
                edits.parse_assignment(assignment)?;
            }
            let form = match tab {
                Some(tab) => ctx.preference_service.submit_tab(tab, &edits).await?,
                None => ctx.preference_service.submit(&edits).await?,
            };
            println!("Preferencias guardadas ({} campo(s))", edits.len());
            print!("{}", render::preference_form(&form, tab));
        }
        PrefsCommand::Reset => {
            let form = ctx.preference_service.reset().await?;
            println!("Preferencias restablecidas");
            print!("{}", render::preference_form(&form, None));
        }
        PrefsCommand::Tabs => print!("{}", render::preference_tabs()),
    }
    Ok(())
}
