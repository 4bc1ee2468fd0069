// ── State diff engine ──
//
// Pure comparison of two state snapshots. Walks every sub-record of the
// aggregate, compares leaf fields by value, and collects changed leaves
// into a flat map under fixed external names. The external names are the
// published contract of the bridge and are independent of the wire
// field naming; changing one breaks every button/feedback binding that
// references it.
//
// An absent previous sub-record means every leaf of the current
// sub-record counts as changed (first population, reconnect).

use ptzlink_api::camera::models::{CruiseInfo, PresetInfo};

use crate::publish::{VariableChanges, VariableValue};
use crate::state::CameraState;

/// Compare `current` against `previous` and collect every changed leaf.
///
/// No I/O, no side effects: callers decide what to do with the result.
/// An empty result means the snapshots are observably identical and
/// nothing may be published.
pub fn reconcile(current: &CameraState, previous: &CameraState) -> VariableChanges {
    let mut changes = VariableChanges::new();

    if let Some(c) = &current.device {
        let p = previous.device.as_ref();
        leaf(&mut changes, "device_name", p.map(|p| p.dev_name.clone()), c.dev_name.clone());
        leaf(&mut changes, "model", p.map(|p| p.model.clone()), c.model.clone());
        leaf(
            &mut changes,
            "serial_number",
            p.map(|p| p.serial_number.clone()),
            c.serial_number.clone(),
        );
        leaf(
            &mut changes,
            "firmware_version",
            p.map(|p| p.soft_version.clone()),
            c.soft_version.clone(),
        );
        leaf(
            &mut changes,
            "hardware_version",
            p.map(|p| p.hard_version.clone()),
            c.hard_version.clone(),
        );
    }

    if let Some(c) = &current.network {
        let p = previous.network.as_ref();
        leaf(&mut changes, "ip_address", p.map(|p| p.ip_address.clone()), c.ip_address.clone());
        leaf(&mut changes, "netmask", p.map(|p| p.netmask.clone()), c.netmask.clone());
        leaf(&mut changes, "gateway", p.map(|p| p.gateway.clone()), c.gateway.clone());
        leaf(
            &mut changes,
            "mac_address",
            p.map(|p| p.mac_address.clone()),
            c.mac_address.clone(),
        );
        leaf(&mut changes, "dhcp", p.map(|p| p.dhcp), c.dhcp);
    }

    if let Some(c) = &current.position {
        let p = previous.position.as_ref();
        leaf(&mut changes, "pan", p.map(|p| p.pan_position), c.pan_position);
        leaf(&mut changes, "tilt", p.map(|p| p.tilt_position), c.tilt_position);
        leaf(&mut changes, "zoom", p.map(|p| p.zoom_position), c.zoom_position);
    }

    if let Some(c) = &current.lens {
        let p = previous.lens.as_ref();
        leaf(
            &mut changes,
            "focus_position",
            p.map(|p| p.focus_position),
            c.focus_position,
        );
        leaf(&mut changes, "focus_mode", p.map(|p| p.focus_mode.clone()), c.focus_mode.clone());
        leaf(&mut changes, "digital_zoom", p.map(|p| p.digital_zoom), c.digital_zoom);
    }

    if let Some(c) = &current.picture {
        let p = previous.picture.as_ref();
        leaf(&mut changes, "flip", p.map(|p| p.flip), c.flip);
        leaf(&mut changes, "mirror", p.map(|p| p.mirror), c.mirror);
        leaf(&mut changes, "brightness", p.map(|p| p.brightness), c.brightness);
        leaf(&mut changes, "contrast", p.map(|p| p.contrast), c.contrast);
        leaf(&mut changes, "saturation", p.map(|p| p.saturation), c.saturation);
        leaf(&mut changes, "sharpness", p.map(|p| p.sharpness), c.sharpness);
        leaf(&mut changes, "hue", p.map(|p| p.hue), c.hue);
    }

    if let Some(c) = &current.gamma {
        let p = previous.gamma.as_ref();
        leaf(&mut changes, "gamma_mode", p.map(|p| p.mode.clone()), c.mode.clone());
        leaf(&mut changes, "gamma_level", p.map(|p| p.level), c.level);
    }

    if let Some(c) = &current.white_balance {
        let p = previous.white_balance.as_ref();
        leaf(&mut changes, "wb_mode", p.map(|p| p.mode.clone()), c.mode.clone());
        leaf(&mut changes, "wb_red_gain", p.map(|p| p.red_gain), c.red_gain);
        leaf(&mut changes, "wb_blue_gain", p.map(|p| p.blue_gain), c.blue_gain);
        leaf(
            &mut changes,
            "color_temperature",
            p.map(|p| p.color_temperature),
            c.color_temperature,
        );
    }

    if let Some(c) = &current.exposure {
        let p = previous.exposure.as_ref();
        leaf(&mut changes, "exposure_mode", p.map(|p| p.mode.clone()), c.mode.clone());
        leaf(&mut changes, "shutter", p.map(|p| p.shutter), c.shutter);
        leaf(&mut changes, "iris", p.map(|p| p.iris), c.iris);
        leaf(&mut changes, "gain", p.map(|p| p.gain), c.gain);
        leaf(
            &mut changes,
            "exposure_compensation",
            p.map(|p| p.compensation),
            c.compensation,
        );
        leaf(&mut changes, "backlight", p.map(|p| p.backlight), c.backlight);
    }

    if let Some(c) = &current.day_night {
        let p = previous.day_night.as_ref();
        leaf(&mut changes, "day_night_mode", p.map(|p| p.mode.clone()), c.mode.clone());
        leaf(
            &mut changes,
            "day_night_sensitivity",
            p.map(|p| p.sensitivity),
            c.sensitivity,
        );
    }

    if let Some(c) = &current.noise_reduction {
        let p = previous.noise_reduction.as_ref();
        leaf(&mut changes, "nr_2d", p.map(|p| p.nr_2d), c.nr_2d);
        leaf(&mut changes, "nr_3d", p.map(|p| p.nr_3d), c.nr_3d);
    }

    if let Some(c) = &current.defog {
        let p = previous.defog.as_ref();
        leaf(&mut changes, "defog", p.map(|p| p.enable), c.enable);
        leaf(&mut changes, "defog_level", p.map(|p| p.level), c.level);
    }

    if let Some(c) = &current.osd {
        let p = previous.osd.as_ref();
        leaf(&mut changes, "osd_name", p.map(|p| p.name.clone()), c.name.clone());
        leaf(&mut changes, "osd_name_enabled", p.map(|p| p.name_enable), c.name_enable);
        leaf(&mut changes, "osd_time_enabled", p.map(|p| p.time_enable), c.time_enable);
    }

    if let Some(c) = &current.audio {
        let p = previous.audio.as_ref();
        leaf(&mut changes, "audio_enabled", p.map(|p| p.enable), c.enable);
        leaf(&mut changes, "audio_volume", p.map(|p| p.volume), c.volume);
        leaf(&mut changes, "audio_encoding", p.map(|p| p.encoding.clone()), c.encoding.clone());
    }

    if let Some(c) = &current.video {
        let p = previous.video.as_ref();
        leaf(&mut changes, "video_format", p.map(|p| p.format.clone()), c.format.clone());
        leaf(&mut changes, "video_codec", p.map(|p| p.codec.clone()), c.codec.clone());
        leaf(&mut changes, "video_bitrate", p.map(|p| p.bitrate), c.bitrate);
    }

    if let Some(c) = &current.power {
        let p = previous.power.as_ref();
        leaf(&mut changes, "standby", p.map(|p| p.standby), c.standby);
    }

    if let Some(presets) = &current.presets {
        diff_presets(&mut changes, presets, previous.presets.as_deref());
    }

    if let Some(cruises) = &current.cruises {
        diff_cruises(&mut changes, cruises, previous.cruises.as_deref());
    }

    changes
}

/// Record `cur` under `name` when it differs from the previous value.
fn leaf<V>(changes: &mut VariableChanges, name: &str, prev: Option<V>, cur: V)
where
    V: Into<VariableValue> + PartialEq,
{
    if prev.as_ref() != Some(&cur) {
        changes.insert(name.to_owned(), cur.into());
    }
}

fn diff_presets(changes: &mut VariableChanges, current: &[PresetInfo], previous: Option<&[PresetInfo]>) {
    for preset in current {
        let prev_name = previous
            .and_then(|list| list.iter().find(|p| p.number == preset.number))
            .map(|p| p.name.clone());
        leaf(
            changes,
            &format!("preset_{}_name", preset.number),
            prev_name,
            preset.name.clone(),
        );
    }
}

fn diff_cruises(changes: &mut VariableChanges, current: &[CruiseInfo], previous: Option<&[CruiseInfo]>) {
    for cruise in current {
        let prev = previous.and_then(|list| list.iter().find(|c| c.number == cruise.number));
        leaf(
            changes,
            &format!("cruise_{}_name", cruise.number),
            prev.map(|c| c.name.clone()),
            cruise.name.clone(),
        );
        leaf(
            changes,
            &format!("cruise_{}_running", cruise.number),
            prev.map(|c| c.running),
            cruise.running,
        );
    }
}
