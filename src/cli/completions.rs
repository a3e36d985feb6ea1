use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    datafun completions --shell bash > ~/.bash_completion.d/datafun\n\n\
                  Generate zsh completions:\n    datafun completions --shell zsh > ~/.zfunc/_datafun\n\n\
                  Generate fish completions:\n    datafun completions --shell fish > ~/.config/fish/completions/datafun.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short = 's')]
    pub shell: String,
}
