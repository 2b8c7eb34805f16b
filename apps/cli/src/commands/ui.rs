use crate::cli::UiCommand;
use crate::main_lib::AppContext;
use crate::ui_state::UiState;

pub fn run(cmd: UiCommand, ctx: &AppContext, state: &mut UiState) -> anyhow::Result<()> {
    match cmd {
        UiCommand::Show => {
            println!("Archivo: {}", ctx.ui_state_file.display());
            println!("Compacto: {}", if state.compact { "sí" } else { "no" });
            println!("Última pestaña: {}", state.last_tab.title());
        }
        UiCommand::Compact { enabled } => {
            state.compact = enabled;
            state.save(&ctx.ui_state_file)?;
            println!("Vista compacta {}", if enabled { "activada" } else { "desactivada" });
        }
    }
    Ok(())
}
