use gastu_core::users::PasswordChange;

use crate::cli::ProfileCommand;
use crate::main_lib::AppContext;
use crate::render;

pub async fn run(cmd: ProfileCommand, ctx: &AppContext) -> anyhow::Result<()> {
    match cmd {
        ProfileCommand::Show => {
            let profile = ctx.user_service.get_profile().await?;
            print!("{}", render::profile(&profile));
        }
        ProfileCommand::Rename { username } => {
            let profile = ctx.user_service.rename(&username).await?;
            println!("Perfil actualizado");
            print!("{}", render::profile(&profile));
        }
        ProfileCommand::Password {
            current,
            new,
            confirm,
        } => {
            let message = ctx
                .user_service
                .change_password(PasswordChange::new(current, new, confirm))
                .await?;
            println!("{}", message);
        }
    }
    Ok(())
}
