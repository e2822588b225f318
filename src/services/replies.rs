use crate::models::{BookingField, Dj, EventDetails};

use super::knowledge;
use super::pricing::{Quote, Tier, EXTRA_HOUR_PRICE};

pub const FAREWELL: &str = "Gracias por tu tiempo y te despido de forma cordial y amigable. Espero que tengas un evento espectacular!";
pub const EMPTY_PROMPT: &str = "Por favor, dime en que puedo ayudarte.";
pub const GENERIC_PROMPT: &str = "¿En que puedo ayudarte?";
pub const UNKNOWN_DJ: &str =
    "No he reconocido ese artista. Por favor, selecciona uno de la lista anterior.";
pub const BOOKING_NOT_SAVED: &str = "Lo siento, no he podido guardar la contratación. \
Tus datos siguen aquí: vuelve a enviar el último dato para intentarlo de nuevo.";
pub const SLOT_TAKEN_AT_SAVE: &str = "Lo siento, esa fecha acaba de ser reservada por otro cliente. \
Vuelve a enviar el último dato para intentarlo de nuevo o escribe \"salir\" para empezar otra vez.";
pub const INTERNAL_ERROR: &str = "Lo siento, ocurrió un error procesando tu mensaje.";

const DEFAULT_PAYMENT_ACCOUNT: &str = "78979566700116362718";
const DEFAULT_PRESSKIT_URL: &str = "https://www.funndarkbookings/presskits.com";

#[derive(Debug, Clone)]
pub struct AgencyInfo {
    pub payment_account: String,
    pub presskit_url: String,
}

impl Default for AgencyInfo {
    fn default() -> Self {
        Self {
            payment_account: DEFAULT_PAYMENT_ACCOUNT.to_string(),
            presskit_url: DEFAULT_PRESSKIT_URL.to_string(),
        }
    }
}

pub fn roster_prompt(database: &str) -> String {
    let rule = "=".repeat(70);
    format!(
        "¡Perfecto! Te muestro todos los DJs que tenemos disponibles con toda su informacion:\n\
         {rule}\n\n{}\n{rule}\n\n¿Cual de estos artistas te interesa contratar?",
        knowledge::format_roster(database)
    )
}

pub fn dj_selected(dj: Dj) -> String {
    let fields: String = BookingField::ORDER
        .iter()
        .map(|f| format!("+ {}\n", f.label()))
        .collect();
    format!(
        "¡Excelente eleccion! Has seleccionado a {dj}\n\
         Para cerrar la contratacion necesito los siguientes datos obligatorios:\n\
         {fields}\n\
         Empecemos con el primer dato.\n{}:",
        BookingField::Location.label()
    )
}

pub fn field_accepted(field: BookingField, value: &str, next: BookingField) -> String {
    format!(
        "[OK] {}: {value}\n\nAhora necesito: {}",
        field.short_label(),
        next.label()
    )
}

pub fn date_unavailable(dj: Dj, date: &str) -> String {
    format!(
        "Lo siento, {dj} no está disponible el {date}. Esa fecha ya está ocupada. Por favor, elige otra fecha."
    )
}

pub fn knowledge_answer(answer: &str) -> String {
    format!("Basandome en nuestra base de datos: {answer}")
}

pub fn booking_summary(
    dj: Dj,
    details: &EventDetails,
    quote: &Quote,
    agency: &AgencyInfo,
) -> String {
    let value = |field: BookingField| details.get(field).unwrap_or_default();
    let rule = "=".repeat(50);
    let thin = "-".repeat(40);
    let not_included = "(No incluido hotel, desplazamiento y comida)\n";

    let mut out = format!(
        "¡Excelente! He recogido todos los datos para contratar a {dj}\n\
         {rule}\n\
         RESUMEN DE LA CONTRATACION:\n\
         DJ: {dj}\n\
         Localizacion: {}\n\
         Fecha: {}\n\
         Duracion: {}\n\
         Cliente: {}\n\
         Telefono: {}\n\
         Email: {}\n\
         {rule}\n\n\
         DESGLOSE DEL PRECIO:\n\n",
        value(BookingField::Location),
        value(BookingField::Date),
        value(BookingField::Duration),
        value(BookingField::FullName),
        value(BookingField::Phone),
        value(BookingField::Email),
    );

    match quote.tier {
        Tier::HomeCity => {
            out.push_str(&format!("Caché base {dj} (Málaga): {}€\n", quote.tier_price));
        }
        Tier::OutsideCountry => {
            out.push_str(&format!("Caché {dj} fuera de España: {}€\n", quote.tier_price));
            out.push_str(not_included);
        }
        Tier::OutsideHomeCity => {
            out.push_str(&format!("Caché {dj} fuera de Málaga: {}€\n", quote.tier_price));
            out.push_str(not_included);
        }
    }
    if quote.extra_hours > 0 {
        out.push_str(&format!(
            "Horas adicionales ({}h x {EXTRA_HOUR_PRICE}€): +{}€\n",
            quote.extra_hours, quote.surcharge
        ));
    }

    out.push_str(&format!(
        "{thin}\n\
         TOTAL: {}€\n\
         {thin}\n\n\
         Para cerrar la contratacion debe hacer el ingreso a la cuenta:\n\
         NUMERO DE CUENTA: {}\n\n\
         Recibira un correo de confirmacion cuando el ingreso sea recibido.\n\n\
         Tambien puede descargar los press kits desde:\n\
         {}\n\n\
         [OK] Contratación guardada correctamente en el sistema\n\n\
         ¡Gracias por confiar en nosotros para tu evento con {dj}!\n\
         ¡Que tengas un espectaculo increible!",
        quote.total, agency.payment_account, agency.presskit_url
    ));
    out
}
