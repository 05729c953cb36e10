//! Output column schema.
//!
//! Consumers of the file address columns by position, so the order here is
//! part of the contract.

pub const COLUMN_COUNT: usize = 35;

pub const HEADER: [&str; COLUMN_COUNT] = [
    "NOMOR PESERTA",
    "ID EVENT",
    "ID KLOTER",
    "NAMA KEGIATAN",
    "PENYELENGGARA",
    "NIK",
    "NAMA",
    "NOMOR TELEPON",
    "JENIS KELAMIN",
    "TANGGAL LAHIR",
    "UMUR (TAHUN)",
    "ALAMAT DOMISILI",
    "KAB/KOTA DOMISILI",
    "KODE KAB/KOTA",
    "KECAMATAN",
    "KODE KECAMATAN",
    "KELURAHAN/DESA",
    "KODE KELURAHAN/DESA",
    "PNS",
    "JENIS PEKERJAAN",
    "NAMA PEKERJAAN",
    "NAMA TEMPAT BEKERJA",
    "GEJALA",
    "CATATAN GEJALA",
    "RIWAYAT KONTAK",
    "RIWAYAT KEGIATAN",
    "STATUS KESEHATAN",
    "TANGGAL PENDAFTARAN",
    "KIRIM UNDANGAN",
    "LOKASI CHECKIN",
    "CHECKIN KEHADIRAN",
    "KODE SAMPEL LAB",
    "TANGGAL HASIL LAB",
    "HASIL TEST",
    "KIRIM HASIL TEST",
];
