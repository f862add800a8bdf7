//! Collects the five roster inputs from flags, falling back to prompts.

use clap::Args;
use dialoguer::{Input, Select};
use roster_models::{Role, RosterRequest};

pub const DEFAULT_START: u64 = 1;
pub const DEFAULT_END: u64 = 2;
pub const DEFAULT_DEPARTMENT: &str = "BSC";

#[derive(Args, Clone, Debug, Default)]
pub struct RosterArgs {
    /// VANO starting number
    #[arg(short = 's', long)]
    pub start: Option<u64>,

    /// VANO ending number
    #[arg(short = 'e', long)]
    pub end: Option<u64>,

    /// Department written into every row
    #[arg(short = 'd', long)]
    pub department: Option<String>,

    /// Role written into every row (teacher or student)
    #[arg(short = 'r', long)]
    pub role: Option<Role>,

    /// General instruction applied by AI (e.g. "don't add user 610")
    #[arg(short = 'i', long)]
    pub instruction: Option<String>,

    /// Never prompt; missing values take their defaults
    #[arg(long)]
    pub no_input: bool,
}

/// Builds a request from flags, prompting for anything missing unless
/// `--no-input` is set.
pub fn collect_request(args: &RosterArgs) -> anyhow::Result<RosterRequest> {
    let interactive = !args.no_input;

    let vano_start = match args.start {
        Some(start) => start,
        None if interactive => Input::<u64>::new()
            .with_prompt("VANO Starting Number")
            .default(DEFAULT_START)
            .interact_text()?,
        None => DEFAULT_START,
    };

    let vano_end = match args.end {
        Some(end) => end,
        None if interactive => Input::<u64>::new()
            .with_prompt("VANO Ending Number")
            .default(vano_start.saturating_add(1).max(DEFAULT_END))
            .interact_text()?,
        None => DEFAULT_END,
    };

    let department = match &args.department {
        Some(department) => department.clone(),
        None if interactive => Input::<String>::new()
            .with_prompt("Department")
            .default(DEFAULT_DEPARTMENT.to_string())
            .interact_text()?,
        None => DEFAULT_DEPARTMENT.to_string(),
    };

    let role = match args.role {
        Some(role) => role,
        None if interactive => {
            let idx = Select::new()
                .with_prompt("Role")
                .items(&Role::ALL[..])
                .default(0)
                .interact()?;
            Role::ALL[idx]
        }
        None => Role::default(),
    };

    let instruction = match &args.instruction {
        Some(instruction) => Some(instruction.clone()),
        None if interactive => Some(
            Input::<String>::new()
                .with_prompt("General Instruction (e.g. don't add user 610, empty for none)")
                .allow_empty(true)
                .interact_text()?,
        ),
        None => None,
    };

    let mut request = RosterRequest::new(vano_start, vano_end, department, role);
    request.instruction = instruction.filter(|i| !i.trim().is_empty());
    Ok(request)
}
