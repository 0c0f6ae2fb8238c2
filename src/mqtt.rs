use crate::command::SwitchCommand;
use crate::prelude::*;

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Message {
    pub topic: String,
    pub retain: bool,
    pub payload: String,
}

impl Message {
    /// Retained on/off state of a switch.
    pub fn for_state(namespace: &str, entity: &InverterSwitch) -> Message {
        Message {
            topic: state_topic(namespace, entity),
            retain: true,
            payload: payload_for(entity.is_on()).to_string(),
        }
    }

    /// Parses an incoming command, eg
    /// `goodwe/cmd/9010KETU000W0000/switch/grid_export` with payload `ON`.
    pub fn to_command(&self, namespace: &str) -> Result<SwitchCommand> {
        let (serial, parts) = self.split_cmd_topic(namespace)?;

        match parts[..] {
            ["switch", key] => {
                if settings::find_by_key(key).is_none() {
                    bail!("unknown switch {} in {}", key, self.topic);
                }

                Ok(SwitchCommand {
                    serial: serial.to_string(),
                    key: key.to_string(),
                    on: self.payload_bool(),
                })
            }
            [..] => bail!("unhandled: {:?}", self),
        }
    }

    // given a cmd Message, return the inverter serial it is intended for.
    //
    // eg goodwe/cmd/9010KETU000W0000/switch/grid_export
    //   => (9010KETU000W0000, ['switch', 'grid_export'])
    fn split_cmd_topic(&self, namespace: &str) -> Result<(&str, Vec<&str>)> {
        let rest = self
            .topic
            .strip_prefix(namespace)
            .and_then(|t| t.strip_prefix("/cmd/"))
            .ok_or_else(|| anyhow!("ignoring topic outside {}/cmd: {}", namespace, self.topic))?;

        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() < 2 || parts[0].is_empty() {
            bail!("ignoring badly formed MQTT topic: {}", self.topic);
        }

        Ok((parts[0], parts[1..].to_vec()))
    }

    fn payload_bool(&self) -> bool {
        matches!(
            self.payload.trim().to_ascii_lowercase().as_str(),
            "1" | "t" | "true" | "on" | "y" | "yes"
        )
    }
}

pub fn state_topic(namespace: &str, entity: &InverterSwitch) -> String {
    format!("{}/{}/switch/{}", namespace, entity.serial_number(), entity.key())
}

pub fn command_topic(namespace: &str, entity: &InverterSwitch) -> String {
    format!("{}/cmd/{}/switch/{}", namespace, entity.serial_number(), entity.key())
}

pub fn payload_for(on: bool) -> &'static str {
    if on {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(topic: &str, payload: &str) -> Message {
        Message {
            topic: topic.to_string(),
            retain: false,
            payload: payload.to_string(),
        }
    }

    #[test]
    fn parses_switch_command() -> Result<()> {
        let cmd = message("goodwe/cmd/9010KETU000W0000/switch/grid_export", "ON").to_command("goodwe")?;
        assert_eq!(
            cmd,
            SwitchCommand {
                serial: "9010KETU000W0000".to_string(),
                key: "grid_export".to_string(),
                on: true,
            }
        );

        Ok(())
    }

    #[test]
    fn payload_truthiness() -> Result<()> {
        for (payload, expected) in [
            ("1", true),
            ("yes", true),
            ("T", true),
            ("0", false),
            ("off", false),
            ("", false),
            ("2", false),
        ] {
            let cmd = message("goodwe/cmd/X/switch/load_control", payload).to_command("goodwe")?;
            assert_eq!(cmd.on, expected, "payload {:?}", payload);
        }

        Ok(())
    }

    #[test]
    fn rejects_foreign_and_malformed_topics() {
        assert!(message("other/cmd/X/switch/load_control", "1").to_command("goodwe").is_err());
        assert!(message("goodwe/cmd/X", "1").to_command("goodwe").is_err());
        assert!(message("goodwe/cmd//switch/load_control", "1").to_command("goodwe").is_err());
        assert!(message("goodwe/cmd/X/switch/load_control_switch", "1").to_command("goodwe").is_err());
        assert!(message("goodwe/cmd/X/number/grid_export", "1").to_command("goodwe").is_err());
    }
}
