//! Form input validation for login and CRUD forms.
//!
//! Validators take the raw field strings as typed and return either the
//! request payload or a user-facing message.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{NewArea, NewTask, NewUser, Priority};

pub const TITLE_MAX_CHARS: usize = 120;
pub const PASSWORD_MIN_CHARS: usize = 8;

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// `YYYY-MM-DD` with plausible month and day ranges.
pub fn is_iso_date(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return false;
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return false;
    }
    let (Ok(_), Ok(m), Ok(d)) = (y.parse::<u16>(), m.parse::<u8>(), d.parse::<u8>()) else {
        return false;
    };
    (1..=12).contains(&m) && (1..=31).contains(&d)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Validate login fields, returning trimmed email and untouched password.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Ingresa tu correo y contraseña.");
    }
    if !looks_like_email(email) {
        return Err("El correo no es válido.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Raw task form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskForm {
    pub titulo: String,
    pub descripcion: String,
    pub prioridad: String,
    pub area_id: String,
    pub asignado_a: String,
    pub fecha_limite: String,
    pub duracion_estimada: String,
}

pub fn validate_task(form: &TaskForm) -> Result<NewTask, &'static str> {
    let titulo = form.titulo.trim();
    if titulo.is_empty() {
        return Err("El título es obligatorio.");
    }
    if titulo.chars().count() > TITLE_MAX_CHARS {
        return Err("El título no puede superar 120 caracteres.");
    }
    let prioridad = if form.prioridad.trim().is_empty() {
        Priority::default()
    } else {
        Priority::from_key(form.prioridad.trim()).ok_or("Prioridad desconocida.")?
    };
    let fecha_limite = optional(&form.fecha_limite);
    if fecha_limite.as_deref().is_some_and(|d| !is_iso_date(d)) {
        return Err("La fecha límite debe tener formato AAAA-MM-DD.");
    }
    let duracion_estimada = match optional(&form.duracion_estimada) {
        None => None,
        Some(raw) => match raw.parse::<f64>() {
            Ok(hours) if hours.is_finite() && hours > 0.0 => Some(hours),
            _ => return Err("La duración estimada debe ser un número positivo de horas."),
        },
    };
    Ok(NewTask {
        titulo: titulo.to_owned(),
        descripcion: form.descripcion.trim().to_owned(),
        prioridad,
        area_id: optional(&form.area_id),
        asignado_a: optional(&form.asignado_a),
        fecha_limite,
        duracion_estimada,
    })
}

pub fn validate_area(nombre: &str, descripcion: &str) -> Result<NewArea, &'static str> {
    let nombre = nombre.trim();
    if nombre.is_empty() {
        return Err("El nombre del área es obligatorio.");
    }
    Ok(NewArea { nombre: nombre.to_owned(), descripcion: descripcion.trim().to_owned() })
}

/// Raw user form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub nombre: String,
    pub email: String,
    pub rol: String,
    pub password: String,
    pub area_id: String,
}

pub fn validate_user(form: &UserForm) -> Result<NewUser, &'static str> {
    let nombre = form.nombre.trim();
    let email = form.email.trim();
    let rol = form.rol.trim();
    if nombre.is_empty() || email.is_empty() || rol.is_empty() {
        return Err("Nombre, correo y rol son obligatorios.");
    }
    if !looks_like_email(email) {
        return Err("El correo no es válido.");
    }
    if form.password.chars().count() < PASSWORD_MIN_CHARS {
        return Err("La contraseña debe tener al menos 8 caracteres.");
    }
    Ok(NewUser {
        nombre: nombre.to_owned(),
        email: email.to_owned(),
        rol: rol.to_owned(),
        password: form.password.clone(),
        area_id: optional(&form.area_id),
    })
}

/// Require a selection for the inference forms.
pub fn validate_selection(id: &str) -> Result<String, &'static str> {
    optional(id).ok_or("Selecciona un elemento primero.")
}
