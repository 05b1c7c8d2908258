//! Command Catalog Tests (renoise-osc-client)
//!
//! Every command is sent through a [`RecordingSender`] and decoded with
//! rosc, so these tests check the exact address and argument types Renoise
//! receives, plus the rejection and clamping rules.

use renoise_osc_client::commands::limits::{INSTRUMENT_VOLUME_MAX, TRACK_VOLUME_MAX};
use renoise_osc_client::commands::Command;
use renoise_osc_client::{Rejection, Renoise, SendOutcome};
use renoise_osc_core::MidiMessage;
use renoise_osc_test_utils::{as_double, RecordingSender};
use rosc::{OscMidiMessage, OscType};
use std::sync::Arc;

fn client() -> (Renoise, Arc<RecordingSender>) {
    let recorder = Arc::new(RecordingSender::new());
    (Renoise::with_sender(recorder.clone()), recorder)
}

/// Assert one message went out and return its address and arguments
fn sent(recorder: &RecordingSender) -> (String, Vec<OscType>) {
    let mut all = recorder.take();
    assert_eq!(all.len(), 1, "expected exactly one datagram");
    let msg = all.remove(0).message();
    (msg.addr, msg.args)
}

fn assert_rejected(outcome: SendOutcome, recorder: &RecordingSender) -> Rejection {
    assert_eq!(recorder.count(), 0, "rejected command reached the sender");
    assert_eq!(outcome.bytes(), 0);
    match outcome.rejection() {
        Some(r) => r.clone(),
        None => panic!("expected rejection, got {}", outcome),
    }
}

// ============================================================================
// Song
// ============================================================================

#[test]
fn test_bpm_bounds() {
    let (renoise, recorder) = client();

    for bpm in [31, 1000, 0, -120] {
        let outcome = renoise.set_bpm(bpm).unwrap();
        let rejection = assert_rejected(outcome, &recorder);
        assert_eq!(rejection.parameter(), "bpm");
    }

    for bpm in [32, 999] {
        let outcome = renoise.set_bpm(bpm).unwrap();
        assert!(outcome.is_sent());
        let (addr, args) = sent(&recorder);
        assert_eq!(addr, "/renoise/song/bpm");
        assert_eq!(args, vec![OscType::Int(bpm)]);
    }
}

#[test]
fn test_sent_outcome_reports_bytes() {
    let (renoise, recorder) = client();
    let outcome = renoise.set_bpm(120).unwrap();
    // "/renoise/song/bpm" (20) + ",i" (4) + int (4)
    assert_eq!(outcome, SendOutcome::Sent { bytes: 28 });
    assert_eq!(recorder.bytes(), 28);
}

#[test]
fn test_lpb_octave_edit_step() {
    let (renoise, recorder) = client();

    assert!(renoise.set_lpb(4).unwrap().is_sent());
    assert_eq!(sent(&recorder), ("/renoise/song/lpb".into(), vec![OscType::Int(4)]));
    assert_rejected(renoise.set_lpb(0).unwrap(), &recorder);
    assert_rejected(renoise.set_lpb(257).unwrap(), &recorder);

    assert!(renoise.set_octave(8).unwrap().is_sent());
    assert_eq!(
        sent(&recorder),
        ("/renoise/song/edit/octave".into(), vec![OscType::Int(8)])
    );
    assert_rejected(renoise.set_octave(9).unwrap(), &recorder);

    assert!(renoise.set_edit_step(0).unwrap().is_sent());
    assert_eq!(
        sent(&recorder),
        ("/renoise/song/edit/step".into(), vec![OscType::Int(0)])
    );
    assert_rejected(renoise.set_edit_step(65).unwrap(), &recorder);
}

#[test]
fn test_boolean_toggles() {
    let (renoise, recorder) = client();

    renoise.set_edit_mode(true).unwrap();
    assert_eq!(
        sent(&recorder),
        ("/renoise/song/edit/mode".into(), vec![OscType::Bool(true)])
    );

    renoise.set_pattern_follow(false).unwrap();
    assert_eq!(
        sent(&recorder),
        ("/renoise/song/edit/pattern_follow".into(), vec![OscType::Bool(false)])
    );

    renoise.set_metronome(true).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/record/metronome");

    renoise.set_metronome_precount(true).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/record/metronome_precount");

    renoise.set_quantization(false).unwrap();
    assert_eq!(
        sent(&recorder),
        ("/renoise/song/record/quantization".into(), vec![OscType::Bool(false)])
    );

    renoise.set_chord_mode(true).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/record/chord_mode");
}

#[test]
fn test_quantization_step_is_an_integer() {
    let (renoise, recorder) = client();

    renoise.set_quantization_step(4).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/record/quantization_step".into(),
            vec![OscType::Int(4)]
        )
    );

    assert_rejected(renoise.set_quantization_step(0).unwrap(), &recorder);
    assert_rejected(renoise.set_quantization_step(33).unwrap(), &recorder);
}

#[test]
fn test_sequence_commands() {
    let (renoise, recorder) = client();

    renoise.trigger_sequence(3).unwrap();
    assert_eq!(
        sent(&recorder),
        ("/renoise/song/sequence/trigger".into(), vec![OscType::Int(3)])
    );

    renoise.schedule_sequence(1).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/sequence/schedule_set");

    renoise.add_scheduled_sequence(2).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/sequence/schedule_add");

    assert_rejected(renoise.trigger_sequence(0).unwrap(), &recorder);

    renoise.mute_slot(2, 5).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/sequence/slot_mute".into(),
            vec![OscType::Int(2), OscType::Int(5)]
        )
    );

    renoise.unmute_slot(1, 1).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/sequence/slot_unmute");

    assert_rejected(renoise.mute_slot(0, 1).unwrap(), &recorder);
}

// ============================================================================
// Global / Transport
// ============================================================================

#[test]
fn test_transport_actions_have_no_arguments() {
    let (renoise, recorder) = client();

    let cases: [(fn(&Renoise) -> renoise_osc_client::Result<SendOutcome>, &str); 6] = [
        (Renoise::start, "/renoise/transport/start"),
        (Renoise::stop, "/renoise/transport/stop"),
        (Renoise::continue_playback, "/renoise/transport/continue"),
        (Renoise::panic, "/renoise/transport/panic"),
        (
            Renoise::loop_block_move_forwards,
            "/renoise/transport/loop/block_move_forwards",
        ),
        (
            Renoise::loop_block_move_backwards,
            "/renoise/transport/loop/block_move_backwards",
        ),
    ];

    for (command, address) in cases {
        assert!(command(&renoise).unwrap().is_sent());
        let (addr, args) = sent(&recorder);
        assert_eq!(addr, address);
        assert!(args.is_empty());
    }
}

#[test]
fn test_evaluate() {
    let (renoise, recorder) = client();

    renoise.evaluate("renoise.song().transport.bpm = 90").unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/evaluate".into(),
            vec![OscType::String("renoise.song().transport.bpm = 90".into())]
        )
    );

    let rejection = assert_rejected(renoise.evaluate("   ").unwrap(), &recorder);
    assert!(matches!(rejection, Rejection::Empty { .. }));
}

#[test]
fn test_loops() {
    let (renoise, recorder) = client();

    renoise.loop_pattern(true).unwrap();
    assert_eq!(
        sent(&recorder),
        ("/renoise/transport/loop/pattern".into(), vec![OscType::Bool(true)])
    );

    renoise.loop_block(false).unwrap();
    assert_eq!(
        sent(&recorder),
        ("/renoise/transport/loop/block".into(), vec![OscType::Bool(false)])
    );

    renoise.loop_range(0.0, 16.0).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/transport/loop/range".into(),
            vec![OscType::Double(0.0), OscType::Double(16.0)]
        )
    );

    renoise.loop_range_beats(4.0, 8.5).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/transport/loop/range_beats".into(),
            vec![OscType::Double(4.0), OscType::Double(8.5)]
        )
    );

    assert_rejected(renoise.loop_range(8.0, 8.0).unwrap(), &recorder);
    assert_rejected(renoise.loop_range(-1.0, 8.0).unwrap(), &recorder);

    renoise.loop_sequence(2, 4).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/transport/loop/sequence".into(),
            vec![OscType::Int(2), OscType::Int(4)]
        )
    );
    assert_rejected(renoise.loop_sequence(4, 2).unwrap(), &recorder);
}

// ============================================================================
// Track
// ============================================================================

#[test]
fn test_panning_bounds() {
    let (renoise, recorder) = client();

    let rejection = assert_rejected(renoise.set_track_prefx_panning(1, 51.0).unwrap(), &recorder);
    assert_eq!(rejection.parameter(), "panning");
    assert_rejected(renoise.set_track_postfx_panning(1, -50.5).unwrap(), &recorder);

    for pan in [-50.0, 50.0] {
        assert!(renoise.set_track_prefx_panning(1, pan).unwrap().is_sent());
        assert_eq!(
            sent(&recorder),
            (
                "/renoise/song/track/1/prefx_panning".into(),
                vec![OscType::Double(pan)]
            )
        );
    }

    renoise.set_track_postfx_panning(-1, 0.0).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/track/-1/postfx_panning");
}

#[test]
fn test_track_index_rules() {
    let (renoise, recorder) = client();

    let rejection = assert_rejected(renoise.mute_track(0).unwrap(), &recorder);
    assert_eq!(
        rejection,
        Rejection::InvalidIndex {
            parameter: "track",
            value: 0
        }
    );
    assert_rejected(renoise.solo_track(-2).unwrap(), &recorder);

    renoise.mute_track(3).unwrap();
    assert_eq!(sent(&recorder), ("/renoise/song/track/3/mute".into(), vec![]));

    renoise.unmute_track(-1).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/track/-1/unmute");

    renoise.solo_track(2).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/track/2/solo");
}

#[test]
fn test_track_volume_clamps() {
    let (renoise, recorder) = client();

    renoise.set_track_prefx_volume(1, 5.0).unwrap();
    let (addr, args) = sent(&recorder);
    assert_eq!(addr, "/renoise/song/track/1/prefx_volume");
    assert_eq!(as_double(&args[0]), TRACK_VOLUME_MAX);

    renoise.set_track_postfx_volume(1, -0.5).unwrap();
    let (_, args) = sent(&recorder);
    assert_eq!(as_double(&args[0]), 0.0);

    renoise.set_track_prefx_volume_db(1, 12.0).unwrap();
    let (addr, args) = sent(&recorder);
    assert_eq!(addr, "/renoise/song/track/1/prefx_volume_db");
    assert_eq!(as_double(&args[0]), 3.0);

    renoise.set_track_postfx_volume_db(1, -500.0).unwrap();
    let (_, args) = sent(&recorder);
    assert_eq!(as_double(&args[0]), -200.0);

    let rejection = assert_rejected(renoise.set_track_prefx_volume(1, f64::NAN).unwrap(), &recorder);
    assert!(matches!(rejection, Rejection::NotANumber { .. }));
}

#[test]
fn test_track_delay_and_width() {
    let (renoise, recorder) = client();

    renoise.set_track_output_delay(2, -100.0).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/track/2/output_delay".into(),
            vec![OscType::Double(-100.0)]
        )
    );
    assert_rejected(renoise.set_track_output_delay(2, 100.1).unwrap(), &recorder);

    renoise.set_track_prefx_width(2, 0.5).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/track/2/prefx_width");
    assert_rejected(renoise.set_track_prefx_width(2, 1.5).unwrap(), &recorder);
}

#[test]
fn test_device_commands() {
    let (renoise, recorder) = client();

    renoise.bypass_device(1, 2, true).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/track/1/device/2/bypass".into(),
            vec![OscType::Bool(true)]
        )
    );

    renoise.set_device_parameter_by_index(1, 2, 3, 0.25).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/track/1/device/2/set_parameter_by_index".into(),
            vec![OscType::Int(3), OscType::Double(0.25)]
        )
    );

    renoise
        .set_device_parameter_by_name(-1, -1, "Cutoff", 0.75)
        .unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/track/-1/device/-1/set_parameter_by_name".into(),
            vec![OscType::String("Cutoff".into()), OscType::Double(0.75)]
        )
    );

    assert_rejected(renoise.bypass_device(1, 0, true).unwrap(), &recorder);
    assert_rejected(renoise.set_device_parameter_by_index(1, 1, 0, 0.5).unwrap(), &recorder);
    assert_rejected(renoise.set_device_parameter_by_name(1, 1, "", 0.5).unwrap(), &recorder);
}

#[test]
fn test_device_parameter_value_must_be_finite() {
    let (renoise, recorder) = client();

    let rejection = assert_rejected(
        renoise.set_device_parameter_by_index(1, 1, 1, f64::NAN).unwrap(),
        &recorder,
    );
    assert_eq!(
        rejection,
        Rejection::NotANumber {
            parameter: "parameter value"
        }
    );

    let rejection = assert_rejected(
        renoise
            .set_device_parameter_by_name(1, 1, "Cutoff", f64::INFINITY)
            .unwrap(),
        &recorder,
    );
    assert_eq!(rejection.parameter(), "parameter value");

    // Device parameters have no fixed range of their own
    assert!(renoise
        .set_device_parameter_by_index(1, 1, 1, -20000.0)
        .unwrap()
        .is_sent());
    let message = recorder.last_message().expect("nothing recorded");
    assert_eq!(as_double(&message.args[1]), -20000.0);
}

// ============================================================================
// Instrument
// ============================================================================

#[test]
fn test_instrument_volume_clamps_to_plus_six_db() {
    let (renoise, recorder) = client();

    let outcome = renoise.set_instrument_volume(1, 10.0).unwrap();
    assert!(outcome.is_sent());
    let (addr, args) = sent(&recorder);
    assert_eq!(addr, "/renoise/song/instrument/1/volume");
    assert_eq!(as_double(&args[0]), 1.9952623149688795);
    assert_eq!(as_double(&args[0]), INSTRUMENT_VOLUME_MAX);

    renoise.set_instrument_volume_db(1, 10.0).unwrap();
    let (addr, args) = sent(&recorder);
    assert_eq!(addr, "/renoise/song/instrument/1/volume_db");
    assert_eq!(as_double(&args[0]), 6.0);
}

#[test]
fn test_instrument_macro() {
    let (renoise, recorder) = client();

    renoise.set_instrument_macro(2, 8, 0.5).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/instrument/2/macro8".into(),
            vec![OscType::Double(0.5)]
        )
    );

    assert_rejected(renoise.set_instrument_macro(2, 0, 0.5).unwrap(), &recorder);
    assert_rejected(renoise.set_instrument_macro(2, 9, 0.5).unwrap(), &recorder);
    assert_rejected(renoise.set_instrument_macro(2, 1, 1.5).unwrap(), &recorder);
}

#[test]
fn test_instrument_choices() {
    let (renoise, recorder) = client();

    renoise.set_instrument_phrase_playback(1, "keymap").unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/instrument/1/phrase_playback".into(),
            vec![OscType::String("Keymap".into())]
        )
    );

    renoise.set_instrument_quantize(1, "Beat").unwrap();
    assert_eq!(sent(&recorder).1, vec![OscType::String("Beat".into())]);

    renoise.set_instrument_scale_key(1, "f#").unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/instrument/1/scale_key".into(),
            vec![OscType::String("F#".into())]
        )
    );

    renoise.set_instrument_scale_mode(1, "natural minor").unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/instrument/1/scale_mode".into(),
            vec![OscType::String("Natural Minor".into())]
        )
    );

    let rejection = assert_rejected(renoise.set_instrument_quantize(1, "Bars").unwrap(), &recorder);
    assert!(matches!(rejection, Rejection::NotAChoice { parameter: "quantize", .. }));
    assert_rejected(renoise.set_instrument_scale_key(1, "H").unwrap(), &recorder);
    assert_rejected(renoise.set_instrument_phrase_playback(0, "Off").unwrap(), &recorder);
}

#[test]
fn test_instrument_integers() {
    let (renoise, recorder) = client();

    renoise.set_instrument_monophonic(-1, true).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/instrument/-1/monophonic".into(),
            vec![OscType::Bool(true)]
        )
    );

    renoise.set_instrument_monophonic_glide(1, 255).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/instrument/1/monophonic_glide".into(),
            vec![OscType::Int(255)]
        )
    );
    assert_rejected(renoise.set_instrument_monophonic_glide(1, 256).unwrap(), &recorder);

    renoise.set_instrument_phrase_program(1, 127).unwrap();
    assert_eq!(sent(&recorder).0, "/renoise/song/instrument/1/phrase_program");
    assert_rejected(renoise.set_instrument_phrase_program(1, 128).unwrap(), &recorder);

    renoise.set_instrument_transpose(1, -120).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/song/instrument/1/transpose".into(),
            vec![OscType::Int(-120)]
        )
    );
    assert_rejected(renoise.set_instrument_transpose(1, 121).unwrap(), &recorder);
}

// ============================================================================
// Trigger
// ============================================================================

#[test]
fn test_note_on_off() {
    let (renoise, recorder) = client();

    renoise.note_on(1, 1, 48, 100).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/trigger/note_on".into(),
            vec![
                OscType::Int(1),
                OscType::Int(1),
                OscType::Int(48),
                OscType::Int(100)
            ]
        )
    );

    renoise.note_off(-1, -1, 48).unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/trigger/note_off".into(),
            vec![OscType::Int(-1), OscType::Int(-1), OscType::Int(48)]
        )
    );

    assert_rejected(renoise.note_on(1, 1, 120, 100).unwrap(), &recorder);
    assert_rejected(renoise.note_on(1, 1, 60, 128).unwrap(), &recorder);
    assert_rejected(renoise.note_off(0, 1, 60).unwrap(), &recorder);
}

#[test]
fn test_send_midi() {
    let (renoise, recorder) = client();

    renoise
        .send_midi(MidiMessage::new(0, 0x90, 60, 127))
        .unwrap();
    assert_eq!(
        sent(&recorder),
        (
            "/renoise/trigger/midi".into(),
            vec![OscType::Midi(OscMidiMessage {
                port: 0,
                status: 0x90,
                data1: 60,
                data2: 127
            })]
        )
    );
}

// ============================================================================
// Raw commands
// ============================================================================

#[test]
fn test_send_command_skips_validation() {
    let (renoise, recorder) = client();

    let command = Command::new("/song/bpm").arg(5);
    let bytes = renoise.send_command(&command).unwrap();
    assert_eq!(bytes, 28);
    assert_eq!(sent(&recorder), ("/renoise/song/bpm".into(), vec![OscType::Int(5)]));
}
