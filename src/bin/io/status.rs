// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use std::io::{stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::MoveToColumn,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};

/// Overwrite the current terminal line with a transient status message
///
/// The cursor stays at the end of the message; repeated calls replace
/// each other. Call [clear] before printing real output over it.
pub(crate) fn update(message: &str) -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(MoveToColumn(0))?;
    stdout.execute(Clear(ClearType::CurrentLine))?;
    write!(stdout, "{}", message)?;
    stdout.flush()?;
    Ok(())
}

/// Wipe the status line once the work it described has finished
pub(crate) fn clear() -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(MoveToColumn(0))?;
    stdout.execute(Clear(ClearType::CurrentLine))?;
    Ok(())
}
