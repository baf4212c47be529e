#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_login()
            || cmd.is_signup()
            || cmd.is_logout()
            || cmd.is_whoami()
            || cmd.is_refresh()
            || cmd.is_rename()
            || cmd.is_delete_account()
            || cmd.is_conversations()
            || cmd.is_open()
            || cmd.is_new()
            || cmd.is_delete()
            || cmd.is_remember()
            || cmd.is_upload()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_login(&self) -> bool {
        return self.command == "/login";
    }

    pub fn is_signup(&self) -> bool {
        return ["/signup", "/register"].contains(&self.command.as_str());
    }

    pub fn is_logout(&self) -> bool {
        return self.command == "/logout";
    }

    pub fn is_whoami(&self) -> bool {
        return ["/whoami", "/me"].contains(&self.command.as_str());
    }

    pub fn is_refresh(&self) -> bool {
        return self.command == "/refresh";
    }

    pub fn is_rename(&self) -> bool {
        return self.command == "/rename";
    }

    pub fn is_delete_account(&self) -> bool {
        return self.command == "/delete-account";
    }

    pub fn is_conversations(&self) -> bool {
        return ["/ls", "/list", "/conversations"].contains(&self.command.as_str());
    }

    pub fn is_open(&self) -> bool {
        return ["/o", "/open"].contains(&self.command.as_str());
    }

    pub fn is_new(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_delete(&self) -> bool {
        return ["/d", "/rm", "/delete"].contains(&self.command.as_str());
    }

    pub fn is_remember(&self) -> bool {
        return self.command == "/remember";
    }

    pub fn is_upload(&self) -> bool {
        return self.command == "/upload";
    }
}
